//!
//! Common types and utilities for the synthetic order feed.
//!
//! This crate aggregates:
//! - `error` — unified error type `FeedError` and its `Result` alias.
//! - `symbols` — ticker symbols an order can be generated for.
//! - `order` — order event model and its JSON wire encoding.
//! - `clock` — nanosecond wall clock used to stamp events.
//! - `net` — broker defaults (server URL, subject, publish interval).
#![warn(missing_docs)]
pub mod clock;
pub mod error;
pub mod net;
pub mod order;
pub mod symbols;

pub use error::FeedError;
pub use order::{Action, OrderDraft, OrderEvent, OrderType};
pub use error::Result;
pub use symbols::Symbol;
