//! Timestamp parsing for records crossing the collaborator boundary.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::errors::{GardenError, GardenResult};

/// Parse an RFC 3339 / ISO 8601 timestamp into UTC.
///
/// Rejects empty or malformed input instead of guessing a value, so a bad
/// `last_watered` never reaches the decay math.
pub fn parse_timestamp(value: &str) -> GardenResult<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GardenError::InvalidTimestamp {
            value: value.to_string(),
            reason: "empty timestamp".to_string(),
        });
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| GardenError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Format a timestamp the way it is stored and sent to collaborators.
///
/// Fixed nanosecond precision with a `Z` suffix, so stored values sort
/// lexicographically in time order.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}
