//! Domain models for the order publisher.
//!
//! - `order_generator` — random order drafts (action, order type, symbol, price, amount).

pub mod order_generator;
