//! Locale error types.

use thiserror::Error;

/// Errors raised while resolving locale settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    /// Language code is not one of the supported locales.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Date is outside the range the Jalali conversion handles.
    #[error("date out of range for the Jalali calendar: {0}")]
    DateOutOfRange(String),
}
