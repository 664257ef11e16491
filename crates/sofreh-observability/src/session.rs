//! Session correlation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::Span;

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Identifier attached to every log event of one shopping session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new session ID.
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let seq = SESSION_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{:x}-{:x}", nanos, seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session's id and start time.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: SessionId,
    started: Instant,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            started: Instant::now(),
        }
    }

    /// Milliseconds since the session started.
    pub fn elapsed_ms(&self) -> u128 {
        self.started.elapsed().as_millis()
    }

    /// The span to enter for the lifetime of the session.
    pub fn span(&self) -> Span {
        session_span(&self.id)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Span carrying `session_id`. Events recorded inside it inherit the field.
pub fn session_span(id: &SessionId) -> Span {
    tracing::info_span!("session", session_id = %id)
}
