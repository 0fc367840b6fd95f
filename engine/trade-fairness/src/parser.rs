//! Parsing of user-entered trade values
//!
//! Input fields hand over raw text. An empty field counts as zero, anything
//! else must be a plain decimal number.

use tracing::warn;

use crate::error::{Result, ValuationError};
use crate::types::{Side, TradeValuation};

/// Parse the value entered for one side of a trade
pub fn parse_value(side: Side, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed.parse::<f64>().map_err(|_| {
        warn!(%side, input = trimmed, "Unparseable trade value");
        ValuationError::InvalidNumber { side, input: trimmed.to_string() }
    })
}

/// Parse both sides and validate them into a [`TradeValuation`]
pub fn parse_valuation(give: &str, get: &str) -> Result<TradeValuation> {
    let give = parse_value(Side::Give, give)?;
    let get = parse_value(Side::Get, get)?;
    TradeValuation::new(give, get)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(parse_value(Side::Give, "").unwrap(), 0.0);
        assert_eq!(parse_value(Side::Get, "   ").unwrap(), 0.0);
    }

    #[test]
    fn test_parses_decimals() {
        assert_eq!(parse_value(Side::Give, " 42 ").unwrap(), 42.0);
        assert_eq!(parse_value(Side::Get, "12.75").unwrap(), 12.75);
        assert_eq!(parse_value(Side::Get, "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_rejects_garbage() {
        match parse_value(Side::Get, "fifty") {
            Err(ValuationError::InvalidNumber { side, input }) => {
                assert_eq!(side, Side::Get);
                assert_eq!(input, "fifty");
            }
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }
        assert!(parse_value(Side::Give, "12,5").is_err());
    }

    #[test]
    fn test_parse_valuation() {
        let valuation = parse_valuation("20", "80").unwrap();
        assert_eq!(valuation, TradeValuation::new(20.0, 80.0).unwrap());

        let empty = parse_valuation("", "").unwrap();
        assert_eq!(empty.score().value(), 50.0);
    }

    #[test]
    fn test_parse_valuation_validates() {
        let err = parse_valuation("-3", "10").unwrap_err();
        assert!(matches!(err, ValuationError::NegativeValue { side: Side::Give, .. }));

        // "inf" parses as f64 but is not a usable value
        let err = parse_valuation("10", "inf").unwrap_err();
        assert!(matches!(err, ValuationError::NonFiniteValue { side: Side::Get }));

        let err = parse_valuation("1e308", "1.7e308").unwrap_err();
        assert!(matches!(err, ValuationError::TotalOverflow { .. }));

        let err = parse_valuation("10", "abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid get value: 'abc' is not a number");
    }
}
