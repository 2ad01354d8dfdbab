//! Broker defaults shared by the publisher and its tests.

/// Broker address used when none is given on the command line.
pub const DEFAULT_SERVER_URL: &str = "nats://localhost:4222";
/// Subject every order event is published on.
pub const MARKET_DATA_SUBJECT: &str = "market_data";
/// Pause between two consecutive publishes, in milliseconds.
pub const PUBLISH_INTERVAL_MS: u64 = 2000;
