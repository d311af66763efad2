//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directives could not be parsed.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Parses filter directives such as `info,tarefas=debug`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when a directive is malformed.
pub fn parse_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(directives)?)
}

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_directives`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the fallback directives are malformed or a
/// subscriber is already installed.
pub fn init_tracing(default_directives: &str) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(default_directives)?,
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
