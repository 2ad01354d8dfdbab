//! Synthetic order generator.
//!
//! `OrderGenerator` draws every random field of an order from a single `rand::Rng`:
//!
//! - action — uniform over `Buy`/`Sell`;
//! - order type — weighted over `Market`/`Limit`/`Cancel` using [`OrderType::weight`];
//! - symbol — uniform over the known [`Symbol`]s;
//! - price — uniform in `[100, 500]`, rounded to cents;
//! - amount — uniform in `[1, 100]`, rounded to cents.
//!
//! The timestamp is not part of the draft; it is sampled by the publisher right before send.

use order_common::order::round_to_cents;
use order_common::{Action, FeedError, OrderDraft, OrderType, Symbol};
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::VariantArray;

/// Lowest price an order can carry.
pub const MIN_PRICE: f64 = 100.0;
/// Highest price an order can carry.
pub const MAX_PRICE: f64 = 500.0;
/// Smallest order amount.
pub const MIN_AMOUNT: f64 = 1.0;
/// Largest order amount.
pub const MAX_AMOUNT: f64 = 100.0;

/// Random order draft source.
pub struct OrderGenerator<R> {
    rng: R,
    order_types: WeightedIndex<f64>,
}

impl OrderGenerator<StdRng> {
    /// Generator seeded from the operating system's entropy source.
    pub fn from_entropy() -> Result<Self, FeedError> {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator, the same seed always yields the same drafts.
    pub fn seeded(seed: u64) -> Result<Self, FeedError> {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OrderGenerator<R> {
    /// Build a generator on top of `rng`.
    pub fn new(rng: R) -> Result<Self, FeedError> {
        let order_types = WeightedIndex::new(OrderType::VARIANTS.iter().map(|t| t.weight()))?;
        Ok(Self { rng, order_types })
    }

    /// Draw the next order, without timestamp.
    pub fn next_draft(&mut self) -> OrderDraft {
        let action = Action::VARIANTS[self.rng.random_range(0..Action::VARIANTS.len())];
        let order_type = OrderType::VARIANTS[self.order_types.sample(&mut self.rng)];
        let symbol = Symbol::VARIANTS[self.rng.random_range(0..Symbol::VARIANTS.len())];
        let price = round_to_cents(self.rng.random_range(MIN_PRICE..=MAX_PRICE));
        let amount = round_to_cents(self.rng.random_range(MIN_AMOUNT..=MAX_AMOUNT));

        OrderDraft {
            symbol,
            price,
            amount,
            action,
            order_type,
        }
    }
}
