//! Observability errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Log filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    /// A global subscriber is already installed.
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),

    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    #[error("unknown log format: {0} (expected human or json)")]
    UnknownFormat(String),
}
