//! Configuration for the trade analyzer

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Result, ValuationError};
use crate::league::LeagueConfig;

/// Default number of decimals when printing a score
pub const DEFAULT_SCORE_PRECISION: usize = 1;

/// Top-level analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// League settings
    pub league: LeagueConfig,

    /// Result output settings
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// How evaluation results are printed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format (text, json)
    pub format: OutputFormat,

    /// Decimals shown for the score in text output
    pub precision: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ValuationError::InvalidConfig(format!("unknown output format: {other}"))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, json, compact)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Text, precision: DEFAULT_SCORE_PRECISION }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading analyzer configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let config: AnalyzerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Defaults, then the optional file, then environment overrides, then
    /// validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Override settings from `TRADE_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(teams) = lookup("TRADE_LEAGUE_TEAMS") {
            self.league.teams = teams.trim().parse().map_err(|_| {
                ValuationError::InvalidConfig(format!(
                    "TRADE_LEAGUE_TEAMS is not a number: {teams}"
                ))
            })?;
        }

        if let Some(draft_type) = lookup("TRADE_DRAFT_TYPE") {
            self.league.draft_type = draft_type.parse()?;
        }

        if let Some(season_stats) = lookup("TRADE_SEASON_STATS") {
            self.league.season_stats = season_stats.parse()?;
        }

        if let Some(format) = lookup("TRADE_OUTPUT_FORMAT") {
            self.output.format = format.parse()?;
        }

        if let Some(level) = lookup("TRADE_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("TRADE_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.league.validate()?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ValuationError::InvalidConfig(format!("invalid log level: {other}")))
            }
        }

        match self.logging.format.as_str() {
            "pretty" | "json" | "compact" => {}
            other => {
                return Err(ValuationError::InvalidConfig(format!("invalid log format: {other}")))
            }
        }

        Ok(())
    }
}
