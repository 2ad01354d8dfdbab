//! Publishing order events to the broker.
//!
//! `MarketDataSink` is the seam between the feed loop and the transport. The production
//! sink is the `async_nats::Client` itself; tests plug in an in-memory sink.
//!
//! `OrderPublisher` performs one iteration of the feed: draw a draft, stamp it with the
//! clock, encode it to JSON, send it and log it. `run_feed` repeats that on a fixed
//! interval until the shutdown future resolves or an error occurs.
use std::future::Future;
use std::time::Duration;

use log::{debug, info};
use order_common::clock::NanoClock;
use order_common::{OrderEvent, Result};
use rand::Rng;

use crate::model::order_generator::OrderGenerator;

/// Destination for encoded order events.
pub trait MarketDataSink {
    /// Send `payload` on `subject`.
    async fn send(&self, subject: &str, payload: Vec<u8>) -> Result<()>;

    /// Push any buffered messages to the broker.
    async fn flush(&self) -> Result<()>;
}

impl MarketDataSink for async_nats::Client {
    async fn send(&self, subject: &str, payload: Vec<u8>) -> Result<()> {
        self.publish(subject.to_string(), payload.into()).await?;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        async_nats::Client::flush(self).await?;
        Ok(())
    }
}

/// Generates, stamps and sends one order event per call.
pub struct OrderPublisher<S, R> {
    sink: S,
    subject: String,
    generator: OrderGenerator<R>,
    clock: NanoClock,
}

impl<S: MarketDataSink, R: Rng> OrderPublisher<S, R> {
    /// Create a publisher sending on `subject` through `sink`.
    pub fn new(sink: S, subject: &str, generator: OrderGenerator<R>) -> Self {
        Self {
            sink,
            subject: subject.to_string(),
            generator,
            clock: NanoClock::new(),
        }
    }

    /// Publish the next synthetic order and return it.
    pub async fn publish_next(&mut self) -> Result<OrderEvent> {
        let draft = self.generator.next_draft();
        // Last value computed before send.
        let order = draft.stamp(self.clock.now());
        let payload = order.to_json_bytes()?;
        debug!("Payload: {}", String::from_utf8_lossy(&payload));

        self.sink.send(&self.subject, payload).await?;
        info!("Published: {}", order);
        Ok(order)
    }

    /// Flush the underlying sink.
    pub async fn flush(&self) -> Result<()> {
        self.sink.flush().await
    }
}

/// Publish one order every `interval` until `shutdown` resolves.
///
/// The shutdown future is only observed while waiting between publishes, so an in-flight
/// send always completes. On shutdown the sink is flushed. Returns the number of published
/// orders. Any encoding or send error ends the loop and is returned as is.
pub async fn run_feed<S, R, F>(
    mut publisher: OrderPublisher<S, R>,
    interval: Duration,
    shutdown: F,
) -> Result<u64>
where
    S: MarketDataSink,
    R: Rng,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut published = 0u64;

    loop {
        publisher.publish_next().await?;
        published += 1;

        tokio::select! {
            _ = &mut shutdown => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    publisher.flush().await?;
    info!("Feed stopped after {} orders", published);
    Ok(published)
}
