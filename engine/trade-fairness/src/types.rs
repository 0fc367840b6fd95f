//! Type definitions for trade fairness evaluation

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::error::{Result, ValuationError};
use crate::fairness::FairnessScore;
use crate::verdict::VerdictTier;

/// Which side of the trade a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Value the user surrenders
    Give,
    /// Value the user receives
    Get,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Give => f.write_str("give"),
            Side::Get => f.write_str("get"),
        }
    }
}

/// Aggregate value on each side of a proposed trade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeValuation {
    pub give: f64,
    pub get: f64,
}

impl TradeValuation {
    /// Create a valuation, rejecting negative and non-finite values and
    /// pairs whose total is not finite
    pub fn new(give: f64, get: f64) -> Result<Self> {
        check_value(Side::Give, give)?;
        check_value(Side::Get, get)?;
        if !(give + get).is_finite() {
            warn!(give, get, "Rejected trade whose total overflows");
            return Err(ValuationError::TotalOverflow { give, get });
        }
        Ok(Self { give, get })
    }

    /// Create a valuation without validation. The scorer accepts any real
    /// input, so this is safe to score but may not be meaningful.
    pub fn unchecked(give: f64, get: f64) -> Self {
        Self { give, get }
    }

    pub fn total(&self) -> f64 {
        self.give + self.get
    }

    /// The same trade from the counterparty's side
    pub fn swapped(&self) -> Self {
        Self { give: self.get, get: self.give }
    }

    pub fn score(&self) -> FairnessScore {
        FairnessScore::compute(self.give, self.get)
    }

    /// Score and classify this trade
    pub fn evaluate(&self) -> TradeEvaluation {
        let score = self.score();
        let tier = score.tier();

        debug!(
            give = self.give,
            get = self.get,
            score = score.value(),
            tier = ?tier,
            "Evaluated trade"
        );

        TradeEvaluation {
            valuation: *self,
            score,
            tier,
            description: tier.description().to_string(),
        }
    }
}

fn check_value(side: Side, value: f64) -> Result<()> {
    if !value.is_finite() {
        warn!(%side, "Rejected non-finite trade value");
        return Err(ValuationError::NonFiniteValue { side });
    }
    if value < 0.0 {
        warn!(%side, value, "Rejected negative trade value");
        return Err(ValuationError::NegativeValue { side, value });
    }
    Ok(())
}

/// Result of scoring a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvaluation {
    pub valuation: TradeValuation,
    pub score: FairnessScore,
    pub tier: VerdictTier,
    pub description: String,
}

impl fmt::Display for TradeEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, self.score)?,
            None => write!(f, "{}", self.score)?,
        }
        write!(f, "\n{}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valuation_validation() {
        assert!(TradeValuation::new(0.0, 0.0).is_ok());
        assert!(TradeValuation::new(12.5, 40.0).is_ok());

        match TradeValuation::new(-1.0, 5.0) {
            Err(ValuationError::NegativeValue { side, value }) => {
                assert_eq!(side, Side::Give);
                assert_eq!(value, -1.0);
            }
            other => panic!("Expected NegativeValue, got {other:?}"),
        }

        let err = TradeValuation::new(5.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, ValuationError::NonFiniteValue { side: Side::Get }));
        assert_eq!(err.side(), Some(Side::Get));

        let err = TradeValuation::new(f64::NAN, 1.0).unwrap_err();
        assert!(matches!(err, ValuationError::NonFiniteValue { side: Side::Give }));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let err = TradeValuation::new(1e308, 1.7e308).unwrap_err();
        assert!(matches!(err, ValuationError::TotalOverflow { .. }));
        assert_eq!(err.side(), None);

        // Each side alone is fine, and large pairs that still sum finitely score normally
        assert!(TradeValuation::new(1e308, 0.0).is_ok());
        let large = TradeValuation::new(1e307, 1.7e307).unwrap();
        let small = TradeValuation::new(1.0, 1.7).unwrap();
        assert!((large.score().value() - small.score().value()).abs() < 1e-9);
        assert!(large.score().favors_receiver());
    }

    #[test]
    fn test_unchecked_scores_negative_values() {
        let valuation = TradeValuation::unchecked(-5.0, 5.0);
        assert_eq!(valuation.score().value(), 50.0);
    }

    #[test]
    fn test_even_trade_evaluation() {
        let eval = TradeValuation::new(50.0, 50.0).unwrap().evaluate();
        assert_eq!(eval.score.value(), 50.0);
        assert_eq!(eval.tier, VerdictTier::Fair);
        assert_eq!(eval.description, "This is in the realm of fairness.");
    }

    #[test]
    fn test_lopsided_trade_evaluation() {
        let eval = TradeValuation::new(20.0, 80.0).unwrap().evaluate();
        assert_eq!(eval.tier, VerdictTier::Lopsided);
        assert_eq!(
            eval.description,
            "They shouldn't accept this trade, but if they do, good for you."
        );
    }

    #[test]
    fn test_swapped_is_complement() {
        let valuation = TradeValuation::new(30.0, 45.0).unwrap();
        let ours = valuation.score();
        let theirs = valuation.swapped().score();
        assert!((ours.value() + theirs.value() - 100.0).abs() < 1e-9);
        assert!((ours.complement().value() - theirs.value()).abs() < 1e-9);
        assert_eq!(valuation.swapped().swapped(), valuation);
        assert_eq!(valuation.total(), 75.0);
    }

    #[test]
    fn test_evaluation_display() {
        let eval = TradeValuation::new(50.0, 50.0).unwrap().evaluate();
        assert_eq!(eval.to_string(), "50.0 / 100\nThis is in the realm of fairness.");
        assert_eq!(format!("{eval:.2}"), "50.00 / 100\nThis is in the realm of fairness.");
    }

    #[test]
    fn test_evaluation_json() {
        let eval = TradeValuation::new(100.0, 0.0).unwrap().evaluate();
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["tier"], "robbery");
        assert_eq!(json["valuation"]["give"], 100.0);
        assert_eq!(json["description"], "You're getting robbed.");

        let back: TradeEvaluation = serde_json::from_value(json).unwrap();
        assert_eq!(back.tier, eval.tier);
        assert_eq!(back.valuation, eval.valuation);
    }
}
