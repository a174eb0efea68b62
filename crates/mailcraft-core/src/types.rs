//! Shared types used across the Mailcraft application.

use crate::error::MailcraftError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wrapper around `chrono::DateTime<Utc>` for consistent timestamp handling.
///
/// Serializes as an RFC 3339 string with full sub-second precision, so a
/// value survives a JSON round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Current moment, bumped past `previous` if the clock has not advanced.
    ///
    /// Mutation timestamps must strictly increase even when two updates land
    /// within the clock's resolution.
    #[must_use]
    pub fn now_after(previous: Self) -> Self {
        let now = Utc::now();
        if now > previous.0 {
            Self(now)
        } else {
            Self(previous.0 + Duration::microseconds(1))
        }
    }

    /// Create a timestamp from a `DateTime<Utc>`.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Get the inner `DateTime<Utc>`.
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parse a timestamp from an RFC3339 string.
    pub fn from_rfc3339(s: &str) -> Result<Self, MailcraftError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| MailcraftError::Validation(format!("invalid timestamp: {e}")))
    }

    /// Format as RFC3339 string.
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
