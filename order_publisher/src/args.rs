//! Command-line arguments for the order publisher.
//!
//! Every flag is optional; the defaults reproduce the stock feed (local broker,
//! `market_data` subject, one order every two seconds).
use std::time::Duration;

use clap::Parser;
use order_common::net::{DEFAULT_SERVER_URL, MARKET_DATA_SUBJECT, PUBLISH_INTERVAL_MS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// NATS server the feed is published to.
    #[clap(long, default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Subject the orders are published on.
    #[clap(long, default_value = MARKET_DATA_SUBJECT)]
    pub subject: String,

    /// Pause between two orders, in milliseconds.
    #[clap(long, default_value_t = PUBLISH_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Seed for the order generator; the same seed replays the same orders.
    /// Without it the generator is seeded from OS entropy.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Publish interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
