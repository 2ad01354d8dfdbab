//! Order event model and JSON encoding helpers.
//!
//! An `OrderEvent` is the payload published to the broker. It is built in two steps:
//! the generator fills an `OrderDraft` with every random field, and the draft becomes an
//! event only once it is stamped with a timestamp. The timestamp is therefore always the
//! last value computed before the event is encoded and sent.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, VariantArray};

use crate::error::FeedError;
use crate::symbols::Symbol;

/// Identifier carried by every published event. It is a placeholder, not a unique id.
pub const PLACEHOLDER_ID: u64 = 0;

/// Side of the order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, VariantArray, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Action {
    /// Buy side.
    Buy,
    /// Sell side.
    Sell,
}

/// Kind of order.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, VariantArray, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum OrderType {
    /// Execute at the best available price.
    Market,
    /// Execute at the given price or better.
    Limit,
    /// Cancel a resting order.
    Cancel,
}

impl OrderType {
    /// Relative sampling weight of this order type. Cancels are deliberately rare.
    pub fn weight(self) -> f64 {
        match self {
            OrderType::Market | OrderType::Limit => 0.45,
            OrderType::Cancel => 0.10,
        }
    }
}

/// Round a value to two decimal places (half away from zero).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Every field of an order event except its timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    /// Symbol the order is for.
    pub symbol: Symbol,
    /// Limit price, two decimals.
    pub price: f64,
    /// Quantity, two decimals.
    pub amount: f64,
    /// Buy or sell.
    pub action: Action,
    /// Market, limit or cancel.
    pub order_type: OrderType,
}

impl OrderDraft {
    /// Turn the draft into a publishable event stamped with `timestamp` (ns since epoch).
    pub fn stamp(self, timestamp: u64) -> OrderEvent {
        OrderEvent {
            id: PLACEHOLDER_ID,
            symbol: self.symbol,
            price: self.price,
            amount: self.amount,
            action: self.action,
            order_type: self.order_type,
            timestamp,
        }
    }
}

/// Synthetic order as it goes on the wire. Field order is the JSON field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Always [`PLACEHOLDER_ID`].
    pub id: u64,
    /// Symbol the order is for.
    pub symbol: Symbol,
    /// Limit price, two decimals.
    pub price: f64,
    /// Quantity, two decimals.
    pub amount: f64,
    /// Buy or sell.
    pub action: Action,
    /// Market, limit or cancel.
    pub order_type: OrderType,
    /// Nanoseconds since the Unix epoch, sampled right before publishing.
    pub timestamp: u64,
}

impl OrderEvent {
    /// Encode the event to UTF-8 JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, FeedError> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }

    /// Decode an event from JSON bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<OrderEvent, FeedError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, symbol: {}, price: {:.2}, amount: {:.2}, action: {}, order_type: {}, timestamp: {}}}",
            self.id,
            self.symbol,
            self.price,
            self.amount,
            self.action,
            self.order_type,
            self.timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft {
            symbol: Symbol::TSLA,
            price: 250.5,
            amount: 12.34,
            action: Action::Sell,
            order_type: OrderType::Limit,
        }
    }

    #[test]
    fn stamping_sets_timestamp_and_placeholder_id() {
        let event = draft().stamp(1_700_000_000_000_000_000);
        assert_eq!(event.id, 0);
        assert_eq!(event.timestamp, 1_700_000_000_000_000_000);
        assert_eq!(event.symbol, Symbol::TSLA);
    }

    #[test]
    fn json_keeps_field_order_and_wire_strings() {
        let bytes = draft().stamp(42).to_json_bytes().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            r#"{"id":0,"symbol":"TSLA","price":250.5,"amount":12.34,"action":"Sell","order_type":"Limit","timestamp":42}"#
        );
    }

    #[test]
    fn decodes_published_payload() {
        let payload = br#"{"id":0,"symbol":"AAPL","price":101.0,"amount":1.5,"action":"Buy","order_type":"Cancel","timestamp":7}"#;
        let event = OrderEvent::from_json_bytes(payload).unwrap();
        assert_eq!(event.action, Action::Buy);
        assert_eq!(event.order_type, OrderType::Cancel);
        assert_eq!(event.timestamp, 7);
    }

    #[test]
    fn rejects_unknown_order_type() {
        let payload = br#"{"id":0,"symbol":"AAPL","price":101.0,"amount":1.5,"action":"Buy","order_type":"Stop","timestamp":7}"#;
        assert!(matches!(
            OrderEvent::from_json_bytes(payload),
            Err(FeedError::SerdeJson(_))
        ));
    }

    #[test]
    fn weights_favor_market_and_limit() {
        assert_eq!(OrderType::Market.weight(), 0.45);
        assert_eq!(OrderType::Limit.weight(), 0.45);
        assert_eq!(OrderType::Cancel.weight(), 0.10);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_to_cents(123.456), 123.46);
        assert_eq!(round_to_cents(99.994), 99.99);
        assert_eq!(round_to_cents(500.0), 500.0);
        assert_eq!(round_to_cents(1.005_000_1), 1.01);
    }

    #[test]
    fn display_echoes_every_field() {
        let line = draft().stamp(9).to_string();
        assert_eq!(
            line,
            "{id: 0, symbol: TSLA, price: 250.50, amount: 12.34, action: Sell, order_type: Limit, timestamp: 9}"
        );
    }
}
