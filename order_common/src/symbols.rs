//! Ticker symbols orders are generated for.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, VariantArray};

/// Set of symbols the feed draws from, uniformly.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantArray,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    AAPL,
    TSLA,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::VariantArray;

    #[test]
    fn only_aapl_and_tsla_are_known() {
        assert_eq!(Symbol::VARIANTS, &[Symbol::AAPL, Symbol::TSLA]);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("tsla".parse::<Symbol>().unwrap(), Symbol::TSLA);
        assert_eq!("Aapl".parse::<Symbol>().unwrap(), Symbol::AAPL);
        assert!("MSFT".parse::<Symbol>().is_err());
    }

    #[test]
    fn serializes_as_ticker_string() {
        assert_eq!(serde_json::to_string(&Symbol::AAPL).unwrap(), "\"AAPL\"");
        assert_eq!(Symbol::TSLA.to_string(), "TSLA");
    }
}
