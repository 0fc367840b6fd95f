//! League settings supplied by the input layer
//!
//! These describe the league a trade happens in (team count, draft style,
//! roster slots, per-stat scoring weights). Nothing here feeds the scorer;
//! the settings travel alongside a valuation as an explicit value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValuationError};

/// Smallest league that can trade
pub const MIN_TEAMS: u32 = 2;

/// Default number of teams
pub const DEFAULT_TEAMS: u32 = 12;

/// League configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Number of teams in the league
    pub teams: u32,

    /// Draft order style
    pub draft_type: DraftType,

    /// Which season's stats drive valuations
    pub season_stats: SeasonStats,

    /// Roster slot counts
    pub roster: RosterSlots,

    /// Per-stat scoring weights
    pub weights: ScoringWeights,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            teams: DEFAULT_TEAMS,
            draft_type: DraftType::Snake,
            season_stats: SeasonStats::Current,
            roster: RosterSlots::default(),
            weights: ScoringWeights::default(),
        }
    }
}

impl LeagueConfig {
    /// Validate league settings
    pub fn validate(&self) -> Result<()> {
        if self.teams < MIN_TEAMS {
            return Err(ValuationError::InvalidConfig(format!(
                "league needs at least {MIN_TEAMS} teams, got {}",
                self.teams
            )));
        }

        if let Some((stat, weight)) = self.weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ValuationError::InvalidConfig(format!(
                "scoring weight for {stat} must be finite, got {weight}"
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftType {
    #[default]
    Snake,
    Linear,
}

impl FromStr for DraftType {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snake" => Ok(DraftType::Snake),
            "linear" => Ok(DraftType::Linear),
            other => Err(ValuationError::InvalidConfig(format!("unknown draft type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonStats {
    #[default]
    Current,
    Last,
}

impl FromStr for SeasonStats {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(SeasonStats::Current),
            "last" => Ok(SeasonStats::Last),
            other => Err(ValuationError::InvalidConfig(format!("unknown season stats: {other}"))),
        }
    }
}

/// Roster slot kinds, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RosterSlot {
    Forward,
    Wing,
    Center,
    LeftWing,
    RightWing,
    Defense,
    Utility,
    Goalie,
    Bench,
    InjuredReserve,
    InjuredReservePlus,
}

impl RosterSlot {
    pub const ALL: [RosterSlot; 11] = [
        RosterSlot::Forward,
        RosterSlot::Wing,
        RosterSlot::Center,
        RosterSlot::LeftWing,
        RosterSlot::RightWing,
        RosterSlot::Defense,
        RosterSlot::Utility,
        RosterSlot::Goalie,
        RosterSlot::Bench,
        RosterSlot::InjuredReserve,
        RosterSlot::InjuredReservePlus,
    ];

    /// Short label used in settings files
    pub fn label(self) -> &'static str {
        match self {
            RosterSlot::Forward => "F",
            RosterSlot::Wing => "W",
            RosterSlot::Center => "C",
            RosterSlot::LeftWing => "LW",
            RosterSlot::RightWing => "RW",
            RosterSlot::Defense => "D",
            RosterSlot::Utility => "U",
            RosterSlot::Goalie => "G",
            RosterSlot::Bench => "B",
            RosterSlot::InjuredReserve => "IR",
            RosterSlot::InjuredReservePlus => "IRp",
        }
    }
}

impl fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RosterSlot {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        RosterSlot::ALL
            .into_iter()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| ValuationError::InvalidConfig(format!("unknown roster slot: {s}")))
    }
}

/// Number of roster spots per slot kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSlots {
    #[serde(rename = "F")]
    pub forward: u32,
    #[serde(rename = "W")]
    pub wing: u32,
    #[serde(rename = "C")]
    pub center: u32,
    #[serde(rename = "LW")]
    pub left_wing: u32,
    #[serde(rename = "RW")]
    pub right_wing: u32,
    #[serde(rename = "D")]
    pub defense: u32,
    #[serde(rename = "U")]
    pub utility: u32,
    #[serde(rename = "G")]
    pub goalie: u32,
    #[serde(rename = "B")]
    pub bench: u32,
    #[serde(rename = "IR")]
    pub injured_reserve: u32,
    #[serde(rename = "IRp")]
    pub injured_reserve_plus: u32,
}

impl Default for RosterSlots {
    fn default() -> Self {
        Self {
            forward: 2,
            wing: 2,
            center: 2,
            left_wing: 2,
            right_wing: 2,
            defense: 4,
            utility: 2,
            goalie: 2,
            bench: 4,
            injured_reserve: 1,
            injured_reserve_plus: 0,
        }
    }
}

impl RosterSlots {
    pub fn get(&self, slot: RosterSlot) -> u32 {
        match slot {
            RosterSlot::Forward => self.forward,
            RosterSlot::Wing => self.wing,
            RosterSlot::Center => self.center,
            RosterSlot::LeftWing => self.left_wing,
            RosterSlot::RightWing => self.right_wing,
            RosterSlot::Defense => self.defense,
            RosterSlot::Utility => self.utility,
            RosterSlot::Goalie => self.goalie,
            RosterSlot::Bench => self.bench,
            RosterSlot::InjuredReserve => self.injured_reserve,
            RosterSlot::InjuredReservePlus => self.injured_reserve_plus,
        }
    }

    pub fn set(&mut self, slot: RosterSlot, count: u32) {
        let field = match slot {
            RosterSlot::Forward => &mut self.forward,
            RosterSlot::Wing => &mut self.wing,
            RosterSlot::Center => &mut self.center,
            RosterSlot::LeftWing => &mut self.left_wing,
            RosterSlot::RightWing => &mut self.right_wing,
            RosterSlot::Defense => &mut self.defense,
            RosterSlot::Utility => &mut self.utility,
            RosterSlot::Goalie => &mut self.goalie,
            RosterSlot::Bench => &mut self.bench,
            RosterSlot::InjuredReserve => &mut self.injured_reserve,
            RosterSlot::InjuredReservePlus => &mut self.injured_reserve_plus,
        };
        *field = count;
    }

    /// Slot counts in display order
    pub fn iter(&self) -> impl Iterator<Item = (RosterSlot, u32)> + '_ {
        RosterSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Total roster size across all slots
    pub fn total(&self) -> u32 {
        self.iter().map(|(_, count)| count).sum()
    }
}

/// Stats a league can weight, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScoringStat {
    Goals,
    Assists,
    Points,
    PlusMinus,
    PenaltyMinutes,
    PowerPlayGoals,
    PowerPlayAssists,
    PowerPlayPoints,
    ShotsOnGoal,
    Wins,
    Shutouts,
    FaceoffsWon,
    FaceoffsLost,
    Hits,
    Blocks,
}

impl ScoringStat {
    pub const ALL: [ScoringStat; 15] = [
        ScoringStat::Goals,
        ScoringStat::Assists,
        ScoringStat::Points,
        ScoringStat::PlusMinus,
        ScoringStat::PenaltyMinutes,
        ScoringStat::PowerPlayGoals,
        ScoringStat::PowerPlayAssists,
        ScoringStat::PowerPlayPoints,
        ScoringStat::ShotsOnGoal,
        ScoringStat::Wins,
        ScoringStat::Shutouts,
        ScoringStat::FaceoffsWon,
        ScoringStat::FaceoffsLost,
        ScoringStat::Hits,
        ScoringStat::Blocks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ScoringStat::Goals => "G",
            ScoringStat::Assists => "A",
            ScoringStat::Points => "P",
            ScoringStat::PlusMinus => "+/-",
            ScoringStat::PenaltyMinutes => "PIM",
            ScoringStat::PowerPlayGoals => "PPG",
            ScoringStat::PowerPlayAssists => "PPA",
            ScoringStat::PowerPlayPoints => "PPP",
            ScoringStat::ShotsOnGoal => "SOG",
            ScoringStat::Wins => "W",
            ScoringStat::Shutouts => "SO",
            ScoringStat::FaceoffsWon => "FW",
            ScoringStat::FaceoffsLost => "FL",
            ScoringStat::Hits => "HIT",
            ScoringStat::Blocks => "BLK",
        }
    }
}

impl fmt::Display for ScoringStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScoringStat {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ScoringStat::ALL
            .into_iter()
            .find(|stat| stat.label() == s)
            .ok_or_else(|| ValuationError::InvalidConfig(format!("unknown scoring stat: {s}")))
    }
}

/// Optional scoring weight per stat; unset stats carry no weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct ScoringWeights(BTreeMap<ScoringStat, f64>);

impl ScoringWeights {
    pub fn get(&self, stat: ScoringStat) -> Option<f64> {
        self.0.get(&stat).copied()
    }

    pub fn set(&mut self, stat: ScoringStat, weight: f64) {
        self.0.insert(stat, weight);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoringStat, f64)> + '_ {
        self.0.iter().map(|(stat, weight)| (*stat, *weight))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<String, f64>> for ScoringWeights {
    type Error = ValuationError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self> {
        raw.into_iter()
            .map(|(label, weight)| Ok((label.parse::<ScoringStat>()?, weight)))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(ScoringWeights)
    }
}

impl From<ScoringWeights> for BTreeMap<String, f64> {
    fn from(weights: ScoringWeights) -> Self {
        weights.0.into_iter().map(|(stat, weight)| (stat.label().to_string(), weight)).collect()
    }
}
