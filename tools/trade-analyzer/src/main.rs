//! Trade Analyzer
//!
//! Reads the value given and received in a proposed trade, scores it and
//! prints the fairness verdict.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use trade_fairness::AnalyzerConfig;

mod cli;
mod logging;

use cli::{Cli, CliHandler};
use logging::initialize_logging;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = AnalyzerConfig::load(cli.config.as_deref())
        .context("Failed to load analyzer configuration")?;

    initialize_logging(&config.logging)?;
    debug!("Trade analyzer v{} starting", trade_fairness::VERSION);

    CliHandler::new(config).handle_command(cli.command)
}
