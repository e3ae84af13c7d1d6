//! Tests for utility functions

use chrono::{TimeZone, Utc};
use interview_slotting::core::SchedulingError;
use interview_slotting::util::{format_slot, init_tracing, now_ms, parse_slot, parse_slots};

#[test]
fn test_parse_slot_formats() {
    let expected = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    assert_eq!(parse_slot("2025-01-01T09:00Z").unwrap(), expected);
    assert_eq!(parse_slot("2025-01-01T09:00:00Z").unwrap(), expected);
    assert_eq!(parse_slot("2025-01-01T10:30:00+01:30").unwrap(), expected);
    assert_eq!(parse_slot(" 2025-01-01T09:00:00.000Z ").unwrap(), expected);
}

#[test]
fn test_parse_slot_rejects_garbage() {
    assert_eq!(
        parse_slot("10:00-10:30"),
        Err(SchedulingError::InvalidSlot("10:00-10:30".to_string()))
    );
    assert!(parse_slots(&["2025-01-01T09:00Z", "soon"]).is_err());
}

#[test]
fn test_string_order_matches_time_order() {
    let raw = ["2025-01-02T08:00:00Z", "2025-01-01T17:00:00Z", "2025-01-01T09:30:00Z"];
    let mut lexical = raw.to_vec();
    lexical.sort_unstable();
    let mut parsed = parse_slots(&raw).unwrap();
    parsed.sort_unstable();
    assert_eq!(parse_slots(&lexical).unwrap(), parsed);
}

#[test]
fn test_format_slot() {
    let slot = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    assert_eq!(format_slot(&slot), "Wednesday, January 1, 2025 at 09:00 UTC");
}

#[test]
fn test_now_ms() {
    assert!(now_ms() > 1_600_000_000_000);
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("subscriber installed");
}
