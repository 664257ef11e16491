//! Observability for the Sofreh storefront.
//!
//! This crate provides:
//! - `LoggingConfig` / `init_logging` - Installs the `tracing` subscriber
//! - `SessionId` / `session_span` - Correlates every event to one shopping session

mod error;
mod logging;
mod session;

pub use error::ObservabilityError;
pub use logging::*;
pub use session::*;
