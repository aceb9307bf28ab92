//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the confirmation line.
//! `RUST_LOG` overrides the default `warn` level.

use crate::types::error::{DemoError, Result};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Fails with [`DemoError::LoggingError`] if a subscriber is already set.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| DemoError::LoggingError(e.to_string()))
}
