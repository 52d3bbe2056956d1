// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Shared helpers for date/time parsing and formatting.
//!
//! The remote fitness API emits naive timestamps such as
//! `2025-12-07 09:27:35.000000`. The six fractional digits are always zero
//! and are matched as literal text, not as sub-second precision.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Format used by the remote API for `start_time` and record timestamps.
pub const REMOTE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S.000000";

/// Instant substituted for any remote timestamp that fails to parse.
///
/// Malformed activities therefore sort last in a descending timeline.
pub const TIMESTAMP_FALLBACK: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Parse a remote timestamp, returning `None` when it does not match
/// [`REMOTE_TIMESTAMP_FORMAT`]. Remote timestamps carry no zone and are
/// interpreted as UTC.
pub fn try_parse_remote_timestamp(text: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, REMOTE_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse a remote timestamp, absorbing failures into [`TIMESTAMP_FALLBACK`].
pub fn parse_remote_timestamp(text: &str) -> DateTime<Utc> {
    try_parse_remote_timestamp(text).unwrap_or_else(|| {
        tracing::debug!(timestamp = text, "Unparseable remote timestamp");
        TIMESTAMP_FALLBACK
    })
}

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}
