//! WASM bindings for slot-engine.
//!
//! Exposes slot computation, bookable-date listing, and config validation to
//! the customer-facing booking widget via `wasm-bindgen`. All complex types
//! are passed as JSON strings; slot times come back as "HH:MM" display
//! strings so the widget renders them without its own minute math.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir widget/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use slot_engine::{
    format_minute_of_day, BlackoutDate, BookingRules, ExistingBooking, Slot, WeeklySchedule,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotDto {
    start: String,
    end: String,
    remaining_capacity: u32,
    is_available: bool,
}

impl From<&Slot> for SlotDto {
    fn from(slot: &Slot) -> Self {
        Self {
            start: format_minute_of_day(slot.start),
            end: format_minute_of_day(slot.end),
            remaining_capacity: slot.remaining_capacity,
            is_available: slot.is_available,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON inputs coming from the widget
// ---------------------------------------------------------------------------

/// Parse a "YYYY-MM-DD" calendar date.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    s.parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_schedule(json: &str) -> Result<WeeklySchedule, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid schedule JSON: {}", e)))
}

fn parse_blackouts(json: &str) -> Result<Vec<BlackoutDate>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid blackouts JSON: {}", e)))
}

fn parse_rules(json: &str) -> Result<BookingRules, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid rules JSON: {}", e)))
}

fn parse_bookings(json: &str) -> Result<Vec<ExistingBooking>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the slot list for one resource on one calendar date.
///
/// Returns a JSON string containing an array of
/// `{start, end, remainingCapacity, isAvailable}` objects with "HH:MM" times,
/// in ascending order, sold-out slots included.
///
/// # Arguments
/// - `schedule_json` -- weekly template, `{monday: {enabled, timeRanges}, ...}`
/// - `blackouts_json` -- array of blackout entries
/// - `rules_json` -- booking rules incl. the venue's IANA timezone
/// - `bookings_json` -- existing bookings for this resource and date
/// - `target_date` -- "YYYY-MM-DD"
#[wasm_bindgen(js_name = "computeSlots")]
pub fn compute_slots(
    schedule_json: &str,
    blackouts_json: &str,
    rules_json: &str,
    bookings_json: &str,
    target_date: &str,
) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let blackouts = parse_blackouts(blackouts_json)?;
    let rules = parse_rules(rules_json)?;
    let bookings = parse_bookings(bookings_json)?;
    let date = parse_date(target_date)?;

    let slots = slot_engine::compute_slots(&schedule, &blackouts, &rules, &bookings, date)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// List the bookable dates in a window, for the widget's date picker.
///
/// Returns a JSON string containing an array of "YYYY-MM-DD" strings: dates
/// whose weekday is open and that are not blacked out. Sold-out days are
/// still listed; the widget shows them with zero available slots.
#[wasm_bindgen(js_name = "openDates")]
pub fn open_dates(
    schedule_json: &str,
    blackouts_json: &str,
    start_date: &str,
    days: u32,
) -> Result<String, JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let blackouts = parse_blackouts(blackouts_json)?;
    let start = parse_date(start_date)?;

    let dates: Vec<String> = slot_engine::open_dates(&schedule, &blackouts, start, days)
        .iter()
        .map(|d| d.to_string())
        .collect();

    serde_json::to_string(&dates)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Validate a resource configuration before it is saved.
///
/// Checks the weekly template, the booking rules, and the blackout list.
/// Returns nothing on success; the error string names the first problem
/// found, suitable for surfacing in the dashboard form.
#[wasm_bindgen(js_name = "validateConfig")]
pub fn validate_config(
    schedule_json: &str,
    rules_json: &str,
    blackouts_json: &str,
) -> Result<(), JsValue> {
    let schedule = parse_schedule(schedule_json)?;
    let rules = parse_rules(rules_json)?;
    let blackouts = parse_blackouts(blackouts_json)?;

    schedule
        .validate()
        .and_then(|()| rules.validate())
        .and_then(|()| slot_engine::validate_blackouts(&blackouts))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
