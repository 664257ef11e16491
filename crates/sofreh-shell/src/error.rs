//! Shell errors.

use thiserror::Error;

/// Errors raised by navigation and settings changes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// No screen is mounted at this path.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    #[error("unknown theme mode: {0} (expected light or dark)")]
    UnknownTheme(String),

    #[error("unknown viewport: {0} (expected mobile, desktop, or a width in pixels)")]
    UnknownViewport(String),

    /// Language or date rendering failed.
    #[error("locale error: {0}")]
    Locale(#[from] sofreh_locale::LocaleError),
}
