//! Trade Fairness - scoring for two-sided fantasy trades
//!
//! Given the aggregate value a user gives up and the aggregate value they
//! receive, this crate computes a symmetric fairness score in `[0, 100]`
//! (50 is an even trade) and maps it to one of nine fixed verdicts.
//!
//! Both core operations, [`fairness_score`] and [`fairness_description`], are
//! pure and infallible. Validation of user input lives in [`TradeValuation::new`]
//! and the [`parser`] module; league settings travel separately as
//! [`LeagueConfig`].

pub mod config;
pub mod error;
pub mod fairness;
pub mod league;
pub mod parser;
pub mod types;
pub mod verdict;


pub use config::{AnalyzerConfig, LoggingConfig, OutputConfig, OutputFormat};
pub use error::{Result, ValuationError};
pub use fairness::{fairness_score, FairnessScore, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE, TAU};
pub use league::{
    DraftType, LeagueConfig, RosterSlot, RosterSlots, ScoringStat, ScoringWeights, SeasonStats,
};
pub use parser::{parse_valuation, parse_value};
pub use types::{Side, TradeEvaluation, TradeValuation};
pub use verdict::{fairness_description, VerdictTier, VERDICT_TABLE};

/// Current version of the trade fairness crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score and classify a trade in one call
pub fn evaluate(give: f64, get: f64) -> TradeEvaluation {
    TradeValuation::unchecked(give, get).evaluate()
}
