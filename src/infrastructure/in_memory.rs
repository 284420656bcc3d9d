use crate::domain::menu::MenuItem;
use crate::domain::order::{Order, OrderId, OrderStatus};
use crate::domain::ports::OrderStore;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

struct Registry {
    next_id: OrderId,
    orders: HashMap<OrderId, Order>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            next_id: 1,
            orders: HashMap::new(),
        }
    }
}

impl Registry {
    fn order_mut(&mut self, order_id: OrderId) -> Result<&mut Order> {
        self.orders
            .get_mut(&order_id)
            .ok_or(OrderError::NotFound(order_id))
    }
}

/// A thread-safe in-memory order store.
///
/// The id counter and the registry sit behind a single `Mutex`, so every
/// operation, reads included, is serialized against every other one. The
/// lock is never held across an `.await` other than its own acquisition.
/// `Clone` shares the same registry.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    registry: Arc<Mutex<Registry>>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty store whose first order gets id 1.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, items: Vec<MenuItem>) -> Result<Order> {
        let mut registry = self.registry.lock().await;
        let id = registry.next_id;
        let order = Order::new(id, items)?;
        registry.orders.insert(id, order.clone());
        registry.next_id += 1;
        Ok(order)
    }

    async fn append_items(&self, order_id: OrderId, items: Vec<MenuItem>) -> Result<Order> {
        let mut registry = self.registry.lock().await;
        let order = registry.order_mut(order_id)?;
        order.append_items(items)?;
        Ok(order.clone())
    }

    async fn pay(&self, order_id: OrderId) -> Result<Order> {
        let mut registry = self.registry.lock().await;
        let order = registry.order_mut(order_id)?;
        order.pay()?;
        Ok(order.clone())
    }

    async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> Result<Order> {
        let mut registry = self.registry.lock().await;
        let order = registry.order_mut(order_id)?;
        order.set_status(status);
        Ok(order.clone())
    }

    async fn get(&self, order_id: OrderId) -> Result<Option<Order>> {
        let registry = self.registry.lock().await;
        Ok(registry.orders.get(&order_id).cloned())
    }

    async fn all_orders(&self) -> Result<Vec<Order>> {
        let registry = self.registry.lock().await;
        Ok(registry.orders.values().cloned().collect())
    }
}
