//! Domain types: the menu catalog, orders and their lifecycle, and the
//! storage port the application layer talks to.

pub mod menu;
pub mod order;
pub mod ports;
