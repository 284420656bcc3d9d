use super::request_reader::Request;
use super::response_writer::Response;
use crate::application::engine::OrderEngine;
use crate::error::{OrderError, Result};
use tracing::warn;

/// Runs one request against the engine and turns the outcome into a
/// response. Failures never propagate: they become `Response::Failure`.
pub async fn handle(engine: &OrderEngine, request: Request) -> Response {
    match dispatch(engine, request).await {
        Ok(response) => response,
        Err(e) => reject(&e),
    }
}

/// Logs a failed request and builds its failure response.
pub fn reject(err: &OrderError) -> Response {
    warn!(kind = err.kind(), "request rejected: {}", err);
    Response::failure(err)
}

async fn dispatch(engine: &OrderEngine, request: Request) -> Result<Response> {
    let response = match request {
        Request::Menu => Response::Menu(engine.menu().to_vec()),
        Request::Create { items } => Response::Order(engine.create_order(&items).await?),
        Request::Add { order_id, items } => {
            Response::Order(engine.add_items(order_id, &items).await?)
        }
        Request::Pay { order_id } => Response::Receipt(engine.pay_order(order_id).await?),
        Request::History => Response::Orders(engine.list_orders().await?),
        Request::Status { order_id, status } => {
            Response::Order(engine.set_status(order_id, status).await?)
        }
        Request::Order { order_id } => Response::Order(engine.order(order_id).await?),
    };
    Ok(response)
}
