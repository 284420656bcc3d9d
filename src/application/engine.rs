use crate::domain::menu::{Catalog, ItemId, MenuItem};
use crate::domain::order::{Order, OrderId, OrderStatus, PaymentReceipt};
use crate::domain::ports::OrderStoreBox;
use crate::error::{OrderError, Result};
use tracing::{debug, info};

/// The entry point callers use to place and manage orders.
///
/// `OrderEngine` owns the immutable catalog and the order store. Item ids are
/// resolved against the catalog here; the store then applies each change
/// atomically. The engine is `Send + Sync` and is meant to be built once and
/// shared (e.g. behind an `Arc`) by every request handler.
pub struct OrderEngine {
    catalog: Catalog,
    store: OrderStoreBox,
}

impl OrderEngine {
    /// Creates a new `OrderEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The menu orders are resolved against.
    /// * `store` - The store owning the order registry.
    pub fn new(catalog: Catalog, store: OrderStoreBox) -> Self {
        Self { catalog, store }
    }

    pub fn menu(&self) -> &[MenuItem] {
        self.catalog.list()
    }

    /// Places a new order. Unknown item ids are dropped and may leave the
    /// order empty. The only failure is a total too large for a `Decimal`.
    pub async fn create_order(&self, item_ids: &[ItemId]) -> Result<Order> {
        let items = self.catalog.resolve(item_ids);
        let order = self.store.create(items).await?;
        info!(order_id = order.id, total = %order.total.value(), "order created");
        Ok(order)
    }

    /// Appends items to an existing order, whatever its status.
    pub async fn add_items(&self, order_id: OrderId, item_ids: &[ItemId]) -> Result<Order> {
        let items = self.catalog.resolve(item_ids);
        let order = self.store.append_items(order_id, items).await?;
        debug!(order_id, items = order.items.len(), "items added");
        Ok(order)
    }

    /// Pays for an order still in `Processing`, sending it out for delivery.
    pub async fn pay_order(&self, order_id: OrderId) -> Result<PaymentReceipt> {
        let order = self.store.pay(order_id).await?;
        info!(order_id = order.id, "order paid");
        Ok(PaymentReceipt::new(order.id))
    }

    /// Overwrites the status with no transition check.
    pub async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> Result<Order> {
        let order = self.store.set_status(order_id, status).await?;
        debug!(order_id, %status, "status changed");
        Ok(order)
    }

    pub async fn order(&self, order_id: OrderId) -> Result<Order> {
        self.store
            .get(order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))
    }

    /// Every known order, in no particular order.
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        self.store.all_orders().await
    }
}
