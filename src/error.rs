use crate::domain::menu::ItemId;
use crate::domain::order::{OrderId, OrderStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(OrderId),
    #[error("order {order_id} is already paid or being processed (status: {status})")]
    InvalidState {
        order_id: OrderId,
        status: OrderStatus,
    },
    #[error("total of order {0} exceeds the largest representable amount")]
    TotalOverflow(OrderId),
    #[error("malformed request: {0}")]
    MalformedInput(String),
    #[error("menu item {0} appears more than once in the catalog")]
    DuplicateMenuItem(ItemId),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OrderError {
    /// Stable tag reported to callers alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::NotFound(_) => "not_found",
            OrderError::InvalidState { .. } => "invalid_state",
            OrderError::TotalOverflow(_) => "total_overflow",
            OrderError::MalformedInput(_) | OrderError::JsonError(_) => "malformed_input",
            OrderError::DuplicateMenuItem(_) => "invalid_catalog",
            OrderError::IoError(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
