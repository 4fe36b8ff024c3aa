//! Tests for blackout matching, recurrence, and validation.

use chrono::NaiveDate;
use slot_engine::{is_blacked_out, validate_blackouts, BlackoutDate, ConfigError};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn one_off(id: &str, d: NaiveDate) -> BlackoutDate {
    BlackoutDate {
        id: id.to_string(),
        date: d,
        reason: None,
        is_recurring: false,
    }
}

fn recurring(id: &str, d: NaiveDate) -> BlackoutDate {
    BlackoutDate {
        id: id.to_string(),
        date: d,
        reason: None,
        is_recurring: true,
    }
}

// ── One-off matching ────────────────────────────────────────────────────────

#[test]
fn one_off_blackout_matches_only_its_date() {
    let blackout = one_off("b1", date(2026, 7, 4));

    assert!(blackout.applies_on(date(2026, 7, 4)));
    assert!(!blackout.applies_on(date(2026, 7, 5)));
    assert!(!blackout.applies_on(date(2027, 7, 4)));
}

// ── Recurring matching ──────────────────────────────────────────────────────

#[test]
fn recurring_blackout_matches_the_same_month_day_every_year() {
    let blackout = recurring("b1", date(2024, 12, 25));

    assert!(blackout.applies_on(date(2026, 12, 25)));
    assert!(blackout.applies_on(date(2031, 12, 25)));
    assert!(!blackout.applies_on(date(2026, 12, 24)));
    assert!(!blackout.applies_on(date(2026, 11, 25)));
}

#[test]
fn recurring_feb_29_fires_only_in_leap_years() {
    let blackout = recurring("b1", date(2024, 2, 29));

    assert!(blackout.applies_on(date(2028, 2, 29)));
    // Common years have no Feb 29; the entry must not bleed onto neighbors.
    assert!(!blackout.applies_on(date(2026, 2, 28)));
    assert!(!blackout.applies_on(date(2026, 3, 1)));
}

// ── List matching ───────────────────────────────────────────────────────────

#[test]
fn any_matching_entry_blacks_out_the_date() {
    let blackouts = vec![
        one_off("b1", date(2026, 7, 4)),
        recurring("b2", date(2020, 12, 25)),
    ];

    assert!(is_blacked_out(&blackouts, date(2026, 7, 4)));
    assert!(is_blacked_out(&blackouts, date(2030, 12, 25)));
    assert!(!is_blacked_out(&blackouts, date(2026, 7, 6)));
    assert!(!is_blacked_out(&[], date(2026, 7, 4)));
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn duplicate_dates_are_rejected() {
    let blackouts = vec![
        one_off("b1", date(2026, 7, 4)),
        recurring("b2", date(2026, 7, 4)),
    ];

    let err = validate_blackouts(&blackouts).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateBlackout(d) if d == date(2026, 7, 4)));
}

#[test]
fn distinct_dates_validate() {
    let blackouts = vec![
        one_off("b1", date(2026, 7, 4)),
        one_off("b2", date(2026, 7, 5)),
    ];
    validate_blackouts(&blackouts).unwrap();
}

// ── Wire format ─────────────────────────────────────────────────────────────

#[test]
fn blackout_deserializes_from_backend_json() {
    let json = r#"{"id":"blk_42","date":"2026-07-04","reason":"Fireworks setup"}"#;
    let blackout: BlackoutDate = serde_json::from_str(json).unwrap();

    assert_eq!(blackout.date, date(2026, 7, 4));
    assert_eq!(blackout.reason.as_deref(), Some("Fireworks setup"));
    assert!(!blackout.is_recurring); // defaults to one-off
}

#[test]
fn recurring_flag_uses_camel_case() {
    let json = r#"{"id":"blk_7","date":"2024-12-25","isRecurring":true}"#;
    let blackout: BlackoutDate = serde_json::from_str(json).unwrap();
    assert!(blackout.is_recurring);
}
