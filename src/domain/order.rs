use super::menu::{MenuItem, Price};
use crate::error::{OrderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type OrderId = i64;

/// Lifecycle of an order.
///
/// Only `pay` guards a transition (`Processing -> OutForDelivery`).
/// `set_status` may move an order to any status, backwards included; it is
/// kept as an administrative override.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Diproses", alias = "Processing")]
    Processing,
    #[serde(rename = "Diantar", alias = "OutForDelivery")]
    OutForDelivery,
    #[serde(rename = "Selesai", alias = "Completed")]
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Diproses",
            OrderStatus::OutForDelivery => "Diantar",
            OrderStatus::Completed => "Selesai",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer's order.
///
/// `total` is always the sum of the item prices. It is only changed through
/// `append_items`, so the two cannot drift apart.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<MenuItem>,
    pub total: Price,
    pub status: OrderStatus,
}

impl Order {
    /// Fails with `TotalOverflow` if the prices do not fit in a `Decimal`.
    pub fn new(id: OrderId, items: Vec<MenuItem>) -> Result<Self> {
        let total = Price::total_of(&items).ok_or(OrderError::TotalOverflow(id))?;
        Ok(Self {
            id,
            items,
            total,
            status: OrderStatus::Processing,
        })
    }

    /// Appends items after the existing ones, whatever the current status.
    ///
    /// The new total is computed first; on overflow the order is left as is.
    pub fn append_items(&mut self, items: Vec<MenuItem>) -> Result<()> {
        let total = Price::total_of(&items)
            .and_then(|added| self.total.checked_add(added))
            .ok_or(OrderError::TotalOverflow(self.id))?;
        self.items.extend(items);
        self.total = total;
        Ok(())
    }

    /// Marks the order as paid and hands it over for delivery.
    pub fn pay(&mut self) -> Result<()> {
        if self.status != OrderStatus::Processing {
            return Err(OrderError::InvalidState {
                order_id: self.id,
                status: self.status,
            });
        }
        self.status = OrderStatus::OutForDelivery;
        Ok(())
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

/// Confirmation returned by a successful payment.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentReceipt {
    pub order_id: OrderId,
    pub message: String,
}

impl PaymentReceipt {
    pub fn new(order_id: OrderId) -> Self {
        Self {
            order_id,
            message: "Payment received. The order is out for delivery.".to_string(),
        }
    }
}
