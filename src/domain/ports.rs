use super::menu::MenuItem;
use super::order::{Order, OrderId, OrderStatus};
use crate::error::Result;
use async_trait::async_trait;

/// Owner of the order registry and the order-id sequence.
///
/// Every method runs as one atomic step: it either applies completely or
/// fails before anything is changed. Items arrive already resolved against
/// the catalog.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, items: Vec<MenuItem>) -> Result<Order>;
    async fn append_items(&self, order_id: OrderId, items: Vec<MenuItem>) -> Result<Order>;
    async fn pay(&self, order_id: OrderId) -> Result<Order>;
    async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> Result<Order>;
    async fn get(&self, order_id: OrderId) -> Result<Option<Order>>;
    async fn all_orders(&self) -> Result<Vec<Order>>;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
