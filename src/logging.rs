//! Structured logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`, either as human-readable
//! lines or as one JSON object per event. `RUST_LOG` takes precedence over
//! the default level; `--verbose` raises the default to `debug`. Entry
//! content is never logged, only ids and counts.

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, LOG_FORMAT_TEXT, VERBOSE_LOG_LEVEL};
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::fmt;
use std::io::IsTerminal;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::EnvFilter;

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str(LOG_FORMAT_TEXT),
            LogFormat::Json => f.write_str(LOG_FORMAT_JSON),
        }
    }
}

/// Builds the level filter: `RUST_LOG` if set, otherwise the default level.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global subscriber. Call once, at startup.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already installed.
pub fn init(format: LogFormat, verbose: bool) -> AppResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_timer(ChronoUtc::rfc_3339())
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
