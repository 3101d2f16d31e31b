//! Timestamp generation.
//!
//! Timestamps are generated once at signing/logging time and carried as
//! strings from then on, so stored metadata round-trips byte-exact.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as ISO-8601 with millisecond precision and a `Z` suffix,
/// e.g. `2026-01-15T10:30:00.123Z`.
#[must_use]
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
