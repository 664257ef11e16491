//! Order tracking codes.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A display-only order reference derived from the placement minute.
///
/// Two orders placed in the same minute share a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingCode(String);

impl TrackingCode {
    /// `YYYYMMDDHHmm` of the given time.
    pub fn from_time(at: &NaiveDateTime) -> Self {
        Self(at.format("%Y%m%d%H%M").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
