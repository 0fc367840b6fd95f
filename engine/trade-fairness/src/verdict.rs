//! Verdict classifier
//!
//! Turns a fairness score into one of nine fixed verdicts. Bands are checked
//! in ascending order against inclusive upper bounds; the first match wins and
//! anything above the last bound is [`VerdictTier::Collusion`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine ordered verdict bands over `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    Robbery,
    GivingALotAway,
    CloseButLosing,
    SlightLoss,
    Fair,
    Win,
    BigWin,
    Lopsided,
    Collusion,
}

/// Inclusive upper bound of each band, ascending. Bounds end in `.4` and the
/// fair band is twice as wide as the others; both are product constants.
pub const VERDICT_TABLE: [(f64, VerdictTier); 8] = [
    (10.4, VerdictTier::Robbery),
    (20.4, VerdictTier::GivingALotAway),
    (30.4, VerdictTier::CloseButLosing),
    (40.4, VerdictTier::SlightLoss),
    (60.4, VerdictTier::Fair),
    (70.4, VerdictTier::Win),
    (80.4, VerdictTier::BigWin),
    (90.4, VerdictTier::Lopsided),
];

impl VerdictTier {
    /// All tiers, lowest first
    pub const ALL: [VerdictTier; 9] = [
        VerdictTier::Robbery,
        VerdictTier::GivingALotAway,
        VerdictTier::CloseButLosing,
        VerdictTier::SlightLoss,
        VerdictTier::Fair,
        VerdictTier::Win,
        VerdictTier::BigWin,
        VerdictTier::Lopsided,
        VerdictTier::Collusion,
    ];

    /// Classify a score. Scores above 90.4 (and NaN) fall through to
    /// [`VerdictTier::Collusion`].
    pub fn from_score(score: f64) -> Self {
        VERDICT_TABLE
            .iter()
            .find(|(upper, _)| score <= *upper)
            .map(|(_, tier)| *tier)
            .unwrap_or(VerdictTier::Collusion)
    }

    /// Inclusive upper bound, `None` for the open top band
    pub fn upper_bound(self) -> Option<f64> {
        VERDICT_TABLE.iter().find(|(_, tier)| *tier == self).map(|(upper, _)| *upper)
    }

    pub fn description(self) -> &'static str {
        match self {
            VerdictTier::Robbery => "You're getting robbed.",
            VerdictTier::GivingALotAway => "Not quite a robbery, but you're giving a lot away.",
            VerdictTier::CloseButLosing => "It's close, but you lose value.",
            VerdictTier::SlightLoss => "You lose, but only by a bit.",
            VerdictTier::Fair => "This is in the realm of fairness.",
            VerdictTier::Win => "You win this trade.",
            VerdictTier::BigWin => "Big win for you.",
            VerdictTier::Lopsided => {
                "They shouldn't accept this trade, but if they do, good for you."
            }
            VerdictTier::Collusion => {
                "We won't tell, but if they accept this, it's probably collusion."
            }
        }
    }
}

impl fmt::Display for VerdictTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Verdict text for a fairness score
pub fn fairness_description(score: f64) -> &'static str {
    VerdictTier::from_score(score).description()
}
