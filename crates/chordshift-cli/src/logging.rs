use anyhow::{bail, Result};
use twyg::{LogLevel, OptsBuilder};

use crate::config::LoggingConfig;

/// Map a configured level name onto a twyg level.
fn parse_level(name: &str) -> Result<LogLevel> {
    match name.to_ascii_lowercase().as_str() {
        "trace" => Ok(LogLevel::Trace),
        "debug" => Ok(LogLevel::Debug),
        "info" => Ok(LogLevel::Info),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "error" => Ok(LogLevel::Error),
        other => bail!(
            "Unknown log level: {}\n\nValid levels: trace, debug, info, warn, error",
            other
        ),
    }
}

/// Effective level: the configured one unless `-v` flags ask for more.
fn effective_level(config: &LoggingConfig, verbose: u8) -> Result<LogLevel> {
    match verbose {
        0 => parse_level(&config.level),
        1 => Ok(LogLevel::Debug),
        _ => Ok(LogLevel::Trace),
    }
}

/// Set up the process-wide logger. Call once, before anything logs.
pub fn init(config: &LoggingConfig, verbose: u8) -> Result<()> {
    let opts = OptsBuilder::new()
        .coloured(config.coloured)
        .level(effective_level(config, verbose)?)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {:?}", e))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logger: {:?}", e))?;

    Ok(())
}
