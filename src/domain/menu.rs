use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type ItemId = i64;

/// The price of a menu item, or the running total of an order.
///
/// Wraps `rust_decimal::Decimal` so sums stay exact. Arithmetic is checked:
/// adding past `Decimal::MAX` yields `None` instead of panicking.
///
/// Serialized as a plain JSON number through `f64`, so values above 2^53 (or
/// with more significant digits than an `f64` holds) lose precision on the
/// wire. The value held in memory is always exact.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Sum of the item prices, or `None` if it does not fit in a `Decimal`.
    pub fn total_of<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Option<Self> {
        items
            .into_iter()
            .try_fold(Price::ZERO, |total, item| total.checked_add(item.price))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
}

impl MenuItem {
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price: Price::new(price),
        }
    }
}

/// The fixed list of purchasable items.
///
/// Built once at startup and never mutated, so it is shared between callers
/// without any locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate item ids.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(OrderError::DuplicateMenuItem(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up each id in turn. Ids with no match are skipped, and an id
    /// given twice yields the item twice.
    pub fn resolve(&self, ids: &[ItemId]) -> Vec<MenuItem> {
        ids.iter()
            .flat_map(|id| self.items.iter().filter(move |item| item.id == *id))
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: vec![
                MenuItem::new(1, "Nasi Goreng", dec!(25000)),
                MenuItem::new(2, "Mie Goreng", dec!(20000)),
                MenuItem::new(3, "Ayam Bakar", dec!(30000)),
            ],
        }
    }
}
