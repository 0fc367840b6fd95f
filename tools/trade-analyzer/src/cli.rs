//! # Command Line Interface
//!
//! Collects the two trade values, hands them to the scorer and prints the
//! result. League settings come from the configuration file and environment.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use trade_fairness::{
    parse_valuation, AnalyzerConfig, OutputFormat, TradeEvaluation, VerdictTier, MAX_SCORE,
    VERDICT_TABLE,
};

/// Fantasy trade analyzer
#[derive(Parser)]
#[command(name = "trade-analyzer")]
#[command(about = "Score a proposed fantasy trade and print a fairness verdict")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a trade from the value you give and the value you get
    Score {
        /// Aggregate value you give up (empty counts as zero)
        #[arg(long, allow_hyphen_values = true)]
        give: String,

        /// Aggregate value you receive (empty counts as zero)
        #[arg(long, allow_hyphen_values = true)]
        get: String,

        /// Output format override (text, json)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Show the verdict table
    Tiers,
    /// Show the effective league settings
    League,
}

/// CLI handler
pub struct CliHandler {
    config: AnalyzerConfig,
}

impl CliHandler {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Handle CLI commands
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Score { give, get, format } => {
                let format = match format {
                    Some(format) => format.parse::<OutputFormat>().context("Invalid --format")?,
                    None => self.config.output.format,
                };
                let output = self.score(&give, &get, format)?;
                println!("{output}");
            }
            Commands::Tiers => {
                println!("{}", render_tiers());
            }
            Commands::League => {
                let league = toml::to_string_pretty(&self.config.league)
                    .context("Failed to render league settings")?;
                print!("{league}");
            }
        }
        Ok(())
    }

    fn score(&self, give: &str, get: &str, format: OutputFormat) -> Result<String> {
        let valuation = parse_valuation(give, get).context("Invalid trade values")?;
        let evaluation = valuation.evaluate();

        info!(
            teams = self.config.league.teams,
            score = evaluation.score.value(),
            "Trade scored"
        );

        self.render(&evaluation, format)
    }

    fn render(&self, evaluation: &TradeEvaluation, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(format!("{:.*}", self.config.output.precision, evaluation)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(evaluation).context("Failed to serialize evaluation")
            }
        }
    }
}

/// One line per verdict band, lowest first
pub fn render_tiers() -> String {
    VerdictTier::ALL
        .iter()
        .map(|tier| match tier.upper_bound() {
            Some(upper) => format!("<= {upper:>5.1}  {tier}"),
            None => format!(">  {:>5.1}  {tier}", last_bound()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn last_bound() -> f64 {
    VERDICT_TABLE.last().map(|(upper, _)| *upper).unwrap_or(MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_score_command() {
        let cli = Cli::try_parse_from(["trade-analyzer", "score", "--give", "20", "--get", "80"])
            .unwrap();
        match cli.command {
            Commands::Score { give, get, format } => {
                assert_eq!(give, "20");
                assert_eq!(get, "80");
                assert!(format.is_none());
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_text_output() {
        let handler = CliHandler::new(AnalyzerConfig::default());
        let output = handler.score("50", "50", OutputFormat::Text).unwrap();
        assert_eq!(output, "50.0 / 100\nThis is in the realm of fairness.");
    }

    #[test]
    fn test_json_output() {
        let handler = CliHandler::new(AnalyzerConfig::default());
        let output = handler.score("20", "80", OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["tier"], "lopsided");
    }

    #[test]
    fn test_negative_value_rejected() {
        let handler = CliHandler::new(AnalyzerConfig::default());
        assert!(handler.score("-5", "10", OutputFormat::Text).is_err());
    }

    #[test]
    fn test_tier_table() {
        let table = render_tiers();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "<=  10.4  You're getting robbed.");
        assert!(lines[8].starts_with(">   90.4"));
    }
}
