//! Logging and tracing setup

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt, EnvFilter};
use trade_fairness::LoggingConfig;

/// Initialize logging from the analyzer's logging configuration.
///
/// `RUST_LOG` wins over the configured level. Output goes to stderr so the
/// evaluation on stdout stays machine-readable.
pub fn initialize_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| anyhow!("Invalid log filter '{}': {}", config.level, e))?;

    let fmt_layer = match config.format.as_str() {
        "json" => fmt::layer().json().with_target(true).with_writer(std::io::stderr).boxed(),
        "compact" => fmt::layer().compact().with_target(false).with_writer(std::io::stderr).boxed(),
        _ => fmt::layer()
            .pretty()
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
