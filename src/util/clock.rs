//! Time helpers: wall clock, slot parsing and slot formatting.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

use crate::core::{SchedulingError, Slot};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Parse an ISO-8601 / RFC 3339 timestamp into a UTC slot.
///
/// Minute-precision stamps such as `2025-01-01T09:00Z` are accepted as well.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidSlot`] carrying the raw input.
pub fn parse_slot(raw: &str) -> Result<Slot, SchedulingError> {
    let trimmed = raw.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .or_else(|_| DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M%#z"))
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| SchedulingError::InvalidSlot(raw.to_string()))
}

/// Parse a list of slots, failing on the first bad entry.
///
/// # Errors
///
/// See [`parse_slot`].
pub fn parse_slots<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Slot>, SchedulingError> {
    raw.iter().map(|s| parse_slot(s.as_ref())).collect()
}

/// Human-readable slot, e.g. `Wednesday, January 1, 2025 at 09:00 UTC`.
pub fn format_slot(slot: &Slot) -> String {
    slot.format("%A, %B %-d, %Y at %H:%M UTC").to_string()
}
