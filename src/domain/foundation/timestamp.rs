//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Immutable point in time, always UTC, at microsecond precision.
///
/// Microseconds match what PostgreSQL `TIMESTAMPTZ` stores, so a value
/// read back from the database compares equal to the one written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.trunc_subsecs(6))
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Current time, or one microsecond past `previous` if the clock has
    /// not moved beyond it.
    pub fn now_after(previous: &Timestamp) -> Self {
        let now = Self::now();
        if now.is_after(previous) {
            now
        } else {
            Self(previous.0 + Duration::microseconds(1))
        }
    }

    /// Parses a user-supplied date.
    ///
    /// Accepts RFC 3339 (`2024-01-15T20:30:00Z`), a naive date-time taken as
    /// UTC (`2024-01-15T20:30` or `2024-01-15T20:30:00`), or a bare date
    /// (`2024-01-15`, midnight UTC).
    pub fn parse(field: &str, input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::empty_field(field));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self::from_datetime(dt.with_timezone(&Utc)));
        }

        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self::from_datetime(naive.and_utc()));
            }
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self::from_datetime(naive.and_utc()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    field,
                    format!("'{}' is not an RFC 3339 date-time or YYYY-MM-DD date", input),
                )
            })
    }

    /// RFC 3339 rendering used in API responses.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
