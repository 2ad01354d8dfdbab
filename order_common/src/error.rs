//! Error types shared across the workspace.
//!
//! The `FeedError` enum unifies the failure cases of the feed: I/O, JSON
//! encoding, sampling setup and the broker client (connect, publish, flush).
//! None of them is recovered from; they are propagated with `?` up to `main`,
//! which turns them into a non-zero exit. [`Result`] is the matching alias.
use std::io;

use thiserror::Error;

/// Unified error type for the order feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// I/O error originating from the standard library or the runtime.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Sampling weights were rejected by the weighted distribution.
    #[error("Invalid sampling weights: {0}")]
    Weights(#[from] rand::distr::weighted::Error),

    /// The initial connection to the broker could not be established.
    #[error("Broker connection error: {0}")]
    Connect(#[from] async_nats::ConnectError),

    /// The broker client refused to publish a message.
    #[error("Publish error: {0}")]
    Publish(#[from] async_nats::PublishError),

    /// Buffered messages could not be flushed to the broker.
    #[error("Flush error: {0}")]
    Flush(#[from] async_nats::client::FlushError),
}

/// Workspace-wide `Result` alias; the error defaults to `FeedError`.
pub type Result<T, E = FeedError> = std::result::Result<T, E>;
