//! Fairness scorer
//!
//! Maps the aggregate value given and received in a trade onto a symmetric
//! score in `[0, 100]`. The score is `50 + 50 * tanh(pct_diff / TAU)` where
//! `pct_diff = (get - give) / (give + get)`, so an even trade lands on 50 and
//! lopsided trades saturate smoothly toward the bounds.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::verdict::VerdictTier;

/// Steepness of the tanh curve; smaller values saturate faster
pub const TAU: f64 = 0.65;

/// Score of an even trade, and of a trade with no value on either side
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Lowest possible score (everything given, nothing received)
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible score (nothing given, everything received)
pub const MAX_SCORE: f64 = 100.0;

/// Compute the fairness score for a trade.
///
/// Total over any pair of reals: a zero total returns [`NEUTRAL_SCORE`] and the
/// result is clamped to `[MIN_SCORE, MAX_SCORE]`. Negative inputs go through
/// the same formula; rejecting them is left to
/// [`TradeValuation::new`](crate::TradeValuation::new). NaN input yields NaN.
///
/// `|pct_diff|` is at most 1 for non-negative input, and tanh saturates at
/// exactly 1.0 for larger finite arguments, so the clamp warning cannot fire
/// for finite input. The clamp stays as the output guarantee.
pub fn fairness_score(give: f64, get: f64) -> f64 {
    let total = give + get;
    if total == 0.0 {
        return NEUTRAL_SCORE;
    }

    let pct_diff = (get - give) / total;
    let raw = NEUTRAL_SCORE + NEUTRAL_SCORE * (pct_diff / TAU).tanh();

    if raw < MIN_SCORE || raw > MAX_SCORE {
        warn!(give, get, raw, "fairness score outside [0, 100], clamping");
    }

    raw.clamp(MIN_SCORE, MAX_SCORE)
}

/// Largest precision for which half-up rounding is applied before formatting
const MAX_ROUNDED_PRECISION: usize = 15;

/// Round half away from zero at `precision` decimals, matching how the
/// result panel prints ties (`62.25` shows as `62.3`)
fn round_half_up(value: f64, precision: usize) -> f64 {
    if precision > MAX_ROUNDED_PRECISION {
        return value;
    }
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// A fairness score guaranteed to lie in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct FairnessScore(f64);

impl FairnessScore {
    /// Wrap a raw score, clamping it into range
    pub fn new(value: f64) -> Self {
        Self(value.clamp(MIN_SCORE, MAX_SCORE))
    }

    /// Score a trade from its two aggregate values
    pub fn compute(give: f64, get: f64) -> Self {
        Self(fairness_score(give, get))
    }

    /// The neutral midpoint
    pub fn neutral() -> Self {
        Self(NEUTRAL_SCORE)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Verdict band this score falls in
    pub fn tier(self) -> VerdictTier {
        VerdictTier::from_score(self.0)
    }

    /// Verdict text for this score
    pub fn description(self) -> &'static str {
        self.tier().description()
    }

    /// The same trade scored from the other side of the table
    pub fn complement(self) -> Self {
        Self(MAX_SCORE - self.0)
    }

    /// True when the receiving side comes out ahead
    pub fn favors_receiver(self) -> bool {
        self.0 > NEUTRAL_SCORE
    }
}

impl From<f64> for FairnessScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<FairnessScore> for f64 {
    fn from(score: FairnessScore) -> Self {
        score.0
    }
}

impl fmt::Display for FairnessScore {
    /// Renders as `"86.4 / 100"`; `{:.N}` overrides the single decimal.
    /// Exact ties round up rather than to even.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(1);
        write!(f, "{:.*} / 100", precision, round_half_up(self.0, precision))
    }
}
