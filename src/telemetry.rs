//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "ADDY_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Error installing the global subscriber.
#[derive(Debug, Error)]
#[error("failed to initialise tracing subscriber: {0}")]
pub struct TelemetryError(String);

/// Returns the filter from [`LOG_ENV`], falling back to [`DEFAULT_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a formatting subscriber writing to standard error.
///
/// Standard output stays free for command output such as the focus
/// countdown.
///
/// # Errors
///
/// Returns [`TelemetryError`] when a global subscriber is already set.
pub fn init_tracing() -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| TelemetryError(error.to_string()))
}
