//! Order Publisher — synthesizes fake financial orders and publishes them to a NATS subject.
//!
//! The binary connects once to the broker, then loops forever:
//!
//! - `OrderGenerator` draws a random order draft (action, order type, symbol, price, amount);
//! - `NanoClock` stamps it with the current time in nanoseconds, last thing before send;
//! - the event is encoded to JSON and published on the subject (`market_data` by default);
//! - a `Published: …` line is logged and the task sleeps for the interval (2 s by default).
//!
//! Failure model: a failed connection, encoding or publish ends the process with a non-zero
//! exit code. There is no retry beyond what the NATS client does on its own. Ctrl+C stops
//! the loop between two publishes, flushes the client and exits cleanly.
//!
//! Usage example (CLI):
//! ```bash
//! order_publisher --server-url nats://localhost:4222 --subject market_data --interval-ms 2000
//! ```
#![warn(missing_docs)]
mod args;
mod model;
mod publisher;

use crate::args::Args;
use crate::model::order_generator::OrderGenerator;
use crate::publisher::{OrderPublisher, run_feed};
use clap::Parser;
use log::{error, info};
use order_common::FeedError;
use order_common::Result;

#[tokio::main]
async fn main() -> Result<(), FeedError> {
    init_logger();
    let args = Args::parse();

    info!("Connecting to NATS server at {}", args.server_url);
    let client = match async_nats::connect(args.server_url.as_str()).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to connect to {}: {}", args.server_url, e);
            return Err(e.into());
        }
    };
    info!(
        "Publishing orders on '{}' every {} ms. Press Ctrl+C to exit.",
        args.subject, args.interval_ms
    );

    let generator = match args.seed {
        Some(seed) => {
            info!("Order generator seeded with {}", seed);
            OrderGenerator::seeded(seed)?
        }
        None => OrderGenerator::from_entropy()?,
    };
    let publisher = OrderPublisher::new(client, &args.subject, generator);

    if let Err(e) = run_feed(publisher, args.interval(), shutdown_signal()).await {
        error!("Order feed failed: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Resolves on Ctrl+C. If the handler cannot be installed the feed runs until killed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Error setting Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down publisher...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
