//! Error types for trade fairness evaluation

use thiserror::Error;

use crate::types::Side;

/// Result type for trade fairness operations
pub type Result<T> = std::result::Result<T, ValuationError>;

/// Errors raised while building a valuation or loading configuration.
///
/// Scoring and classification never fail; only the collaborator-facing
/// constructors and loaders return these.
#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Negative {side} value: {value}")]
    NegativeValue { side: Side, value: f64 },

    #[error("Non-finite {side} value")]
    NonFiniteValue { side: Side },

    #[error("Trade total overflows: give {give} + get {get}")]
    TotalOverflow { give: f64, get: f64 },

    #[error("Invalid {side} value: '{input}' is not a number")]
    InvalidNumber { side: Side, input: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration serialization error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl ValuationError {
    /// Side of the trade the error refers to, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            ValuationError::NegativeValue { side, .. }
            | ValuationError::NonFiniteValue { side }
            | ValuationError::InvalidNumber { side, .. } => Some(*side),
            _ => None,
        }
    }
}
