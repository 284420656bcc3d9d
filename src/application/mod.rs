//! Application layer orchestrating the order workflow.
//!
//! This module defines the `OrderEngine`, the single entry point for placing,
//! extending, paying and tracking orders. It resolves menu items and delegates
//! every state change to an `OrderStore` implementation.

pub mod engine;
