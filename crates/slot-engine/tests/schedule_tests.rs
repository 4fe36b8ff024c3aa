//! Tests for weekly-template validation and lookup.

use chrono::Weekday;
use slot_engine::{format_minute_of_day, ConfigError, DaySchedule, TimeRange, WeeklySchedule};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn weekdays_only() -> WeeklySchedule {
    let open = DaySchedule::open(vec![TimeRange::new(540, 1020)]);
    WeeklySchedule {
        monday: open.clone(),
        tuesday: open.clone(),
        wednesday: open.clone(),
        thursday: open.clone(),
        friday: open,
        saturday: DaySchedule::closed(),
        sunday: DaySchedule::closed(),
    }
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn weekday_template_validates() {
    weekdays_only().validate().unwrap();
}

#[test]
fn all_closed_template_validates() {
    WeeklySchedule::closed().validate().unwrap();
}

#[test]
fn closed_day_with_ranges_is_rejected() {
    let mut schedule = weekdays_only();
    schedule.saturday.time_ranges.push(TimeRange::new(540, 720));

    let err = schedule.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ClosedDayWithRanges {
            weekday: Weekday::Sat,
            count: 1
        }
    ));
}

#[test]
fn open_day_without_ranges_is_rejected() {
    let mut schedule = weekdays_only();
    schedule.wednesday.time_ranges.clear();

    let err = schedule.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OpenDayWithoutRanges {
            weekday: Weekday::Wed
        }
    ));
}

#[test]
fn inverted_range_is_rejected() {
    let mut schedule = weekdays_only();
    schedule.monday.time_ranges = vec![TimeRange::new(600, 600)];

    let err = schedule.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidTimeRange {
            start: 600,
            end: 600
        }
    ));
}

#[test]
fn range_past_midnight_is_rejected() {
    let mut schedule = weekdays_only();
    schedule.monday.time_ranges = vec![TimeRange::new(1380, 1500)];

    let err = schedule.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeRange { .. }));
}

#[test]
fn range_ending_exactly_at_midnight_is_accepted() {
    let mut schedule = weekdays_only();
    schedule.monday.time_ranges = vec![TimeRange::new(1200, 1440)];
    schedule.validate().unwrap();
}

#[test]
fn overlapping_ranges_are_rejected() {
    let mut schedule = weekdays_only();
    schedule.monday.time_ranges = vec![TimeRange::new(540, 720), TimeRange::new(700, 900)];

    let err = schedule.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnorderedRanges {
            weekday: Weekday::Mon,
            start: 700,
            end: 900
        }
    ));
}

#[test]
fn out_of_order_ranges_are_rejected() {
    let mut schedule = weekdays_only();
    schedule.monday.time_ranges = vec![TimeRange::new(780, 900), TimeRange::new(540, 720)];

    assert!(matches!(
        schedule.validate(),
        Err(ConfigError::UnorderedRanges { .. })
    ));
}

#[test]
fn back_to_back_ranges_are_accepted() {
    // Touching is not overlapping.
    let mut schedule = weekdays_only();
    schedule.monday.time_ranges = vec![TimeRange::new(540, 720), TimeRange::new(720, 900)];
    schedule.validate().unwrap();
}

// ── Lookup ──────────────────────────────────────────────────────────────────

#[test]
fn day_lookup_maps_every_weekday() {
    let schedule = weekdays_only();
    assert!(schedule.day(Weekday::Mon).enabled);
    assert!(schedule.day(Weekday::Fri).enabled);
    assert!(!schedule.day(Weekday::Sat).enabled);
    assert!(!schedule.day(Weekday::Sun).enabled);
}

#[test]
fn uniform_applies_the_same_hours_everywhere() {
    let schedule = WeeklySchedule::uniform(DaySchedule::open(vec![TimeRange::new(600, 660)]));
    for weekday in [Weekday::Mon, Weekday::Thu, Weekday::Sun] {
        assert_eq!(schedule.day(weekday).time_ranges, vec![TimeRange::new(600, 660)]);
    }
}

// ── Wire format ─────────────────────────────────────────────────────────────

#[test]
fn schedule_serializes_with_camel_case_fields() {
    let json = serde_json::to_string(&weekdays_only()).unwrap();
    assert!(json.contains("\"timeRanges\""));
    assert!(json.contains("\"enabled\""));
    assert!(json.contains("\"saturday\""));
}

#[test]
fn day_with_missing_ranges_field_deserializes_as_empty() {
    let day: DaySchedule = serde_json::from_str(r#"{"enabled":false}"#).unwrap();
    assert_eq!(day, DaySchedule::closed());
}

// ── Display helper ──────────────────────────────────────────────────────────

#[test]
fn minutes_format_as_zero_padded_clock_times() {
    assert_eq!(format_minute_of_day(0), "00:00");
    assert_eq!(format_minute_of_day(540), "09:00");
    assert_eq!(format_minute_of_day(605), "10:05");
    assert_eq!(format_minute_of_day(1439), "23:59");
}
