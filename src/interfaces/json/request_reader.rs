use crate::domain::menu::ItemId;
use crate::domain::order::{OrderId, OrderStatus};
use crate::error::{OrderError, Result};
use serde::Deserialize;
use std::io::BufRead;

/// A caller intent, tagged by its `action` field.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    Menu,
    Create {
        items: Vec<ItemId>,
    },
    Add {
        order_id: OrderId,
        items: Vec<ItemId>,
    },
    Pay {
        order_id: OrderId,
    },
    History,
    Status {
        order_id: OrderId,
        status: OrderStatus,
    },
    Order {
        order_id: OrderId,
    },
}

/// Reads requests from a JSON-lines source.
///
/// Blank lines are skipped. A line that does not parse yields a
/// `MalformedInput` error and reading carries on with the next line.
pub struct RequestReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> RequestReader<R> {
    /// Creates a new `RequestReader` from any buffered source (e.g. a file or
    /// locked stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator that lazily reads and parses requests.
    pub fn requests(self) -> impl Iterator<Item = Result<Request>> {
        self.source.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(parse_request(&line)),
            Err(e) => Some(Err(OrderError::from(e))),
        })
    }
}

fn parse_request(line: &str) -> Result<Request> {
    serde_json::from_str(line).map_err(|e| OrderError::MalformedInput(e.to_string()))
}
