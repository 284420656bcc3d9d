use crate::domain::menu::MenuItem;
use crate::domain::order::{Order, PaymentReceipt};
use crate::error::{OrderError, Result};
use serde::Serialize;
use std::io::Write;

/// What a single request produces on the wire.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum Response {
    Menu(Vec<MenuItem>),
    Order(Order),
    Orders(Vec<Order>),
    Receipt(PaymentReceipt),
    Failure { error: String, kind: &'static str },
}

impl Response {
    pub fn failure(err: &OrderError) -> Self {
        let error = match err {
            OrderError::NotFound(_) => "order not found".to_string(),
            OrderError::InvalidState { .. } => {
                "order already paid or being processed".to_string()
            }
            other => other.to_string(),
        };
        Response::Failure {
            error,
            kind: err.kind(),
        }
    }
}

/// Writes responses as JSON lines.
pub struct ResponseWriter<W: Write> {
    writer: W,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_response(&mut self, response: &Response) -> Result<()> {
        serde_json::to_writer(&mut self.writer, response)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    fn written(responses: &[Response]) -> String {
        let mut buffer = Vec::new();
        let mut writer = ResponseWriter::new(&mut buffer);
        for response in responses {
            writer.write_response(response).unwrap();
        }
        writer.flush().unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_one_line_per_response() {
        let output = written(&[
            Response::Orders(vec![]),
            Response::Receipt(PaymentReceipt::new(4)),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[]");
        assert!(lines[1].starts_with(r#"{"order_id":4,"message":"#));
    }

    #[test]
    fn test_failure_mapping() {
        let output = written(&[
            Response::failure(&OrderError::NotFound(99)),
            Response::failure(&OrderError::InvalidState {
                order_id: 1,
                status: OrderStatus::OutForDelivery,
            }),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], r#"{"error":"order not found","kind":"not_found"}"#);
        assert_eq!(
            lines[1],
            r#"{"error":"order already paid or being processed","kind":"invalid_state"}"#
        );
    }

    #[test]
    fn test_malformed_failure_keeps_detail() {
        let response = Response::failure(&OrderError::MalformedInput("expected value".into()));
        assert_eq!(
            response,
            Response::Failure {
                error: "malformed request: expected value".to_string(),
                kind: "malformed_input",
            }
        );
    }
}
