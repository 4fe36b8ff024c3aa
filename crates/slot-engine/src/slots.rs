//! The availability engine: weekly template + blackouts + rules + booking
//! snapshot -> ordered bookable slots for one calendar date.
//!
//! Pure and stateless. Every call is independent given its inputs, so the
//! engine is safe to invoke concurrently from any number of request handlers
//! without coordination. Serializing two customers racing for the last seat
//! belongs to the booking-commit path, which re-checks capacity under its own
//! transaction; this output is display-advisory.

use crate::blackout::{is_blacked_out, BlackoutDate};
use crate::booking::ExistingBooking;
use crate::error::{ConfigError, Result};
use crate::rules::BookingRules;
use crate::schedule::WeeklySchedule;
use chrono::{DateTime, Datelike, Days, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One bookable (or sold-out) slot on the target date.
///
/// Unavailable slots are included in the output rather than filtered, so the
/// widget can render them disabled ("sold out", "1 left") instead of hiding
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Slot start, minutes since midnight in the venue timezone.
    pub start: u16,
    /// Slot end, minutes since midnight in the venue timezone.
    pub end: u16,
    /// Seats left after existing bookings, floored at zero.
    pub remaining_capacity: u32,
    pub is_available: bool,
}

impl Slot {
    /// Whether a party of the given size can book this slot.
    pub fn fits(&self, party_size: u32) -> bool {
        self.is_available && self.remaining_capacity >= party_size
    }
}

/// Compute the ordered slot list for one resource on one calendar date,
/// evaluated against an explicit wall-clock instant.
///
/// The algorithm:
/// 1. A blacked-out date has zero availability (empty list, not an error).
/// 2. A disabled weekday or one without ranges is likewise empty.
/// 3. Each range is walked from its start in `slot_interval_minutes` steps,
///    emitting `[t, t + default_duration_minutes)` while the slot still fits
///    inside the range. No partial trailing slot is emitted. Ranges are
///    processed in the order they appear; an unsorted or overlapping template
///    is a data-entry bug caught by [`WeeklySchedule::validate`] at config
///    write, not silently fixed here.
/// 4. On the current date in `rules.timezone`, candidates whose start has
///    already passed are dropped. Dates before the current date are entirely
///    in the past and come back empty; future dates are unaffected.
/// 5. Capacity counts non-cancelled bookings whose `[slot_start, slot_end)`
///    exactly equals the candidate's interval. Overlapping candidates (legal
///    when the interval is shorter than the duration) account independently.
/// 6. With `allow_join_existing`, a slot stays available while seats remain;
///    without it, any existing booking closes the slot outright.
///
/// # Errors
/// Returns a [`ConfigError`] for rules the engine cannot interpret: zero
/// interval, zero duration, zero capacity, or an invalid IANA timezone.
pub fn compute_slots_at(
    schedule: &WeeklySchedule,
    blackouts: &[BlackoutDate],
    rules: &BookingRules,
    bookings: &[ExistingBooking],
    target_date: NaiveDate,
    now: DateTime<Utc>,
) -> Result<Vec<Slot>> {
    rules.validate()?;
    let tz = rules.tz()?;

    if is_blacked_out(blackouts, target_date) {
        return Ok(Vec::new());
    }

    let day = schedule.day(target_date.weekday());
    if !day.enabled || day.time_ranges.is_empty() {
        return Ok(Vec::new());
    }

    let now_local = now.with_timezone(&tz);
    let today = now_local.date_naive();
    if target_date < today {
        return Ok(Vec::new());
    }
    // Second-of-day cutoff, only on the current date. A slot starting exactly
    // now counts as passed.
    let cutoff_seconds =
        (target_date == today).then(|| now_local.time().num_seconds_from_midnight());

    let interval = rules.slot_interval_minutes;
    let duration = rules.default_duration_minutes;

    let mut slots = Vec::new();
    for range in &day.time_ranges {
        let mut t = u32::from(range.start);
        while t + duration <= u32::from(range.end) {
            let start_passed = cutoff_seconds.is_some_and(|secs| t * 60 <= secs);
            if !start_passed {
                slots.push(build_slot(t, t + duration, rules, bookings));
            }
            t += interval;
        }
    }

    Ok(slots)
}

/// [`compute_slots_at`] evaluated against the real wall clock.
pub fn compute_slots(
    schedule: &WeeklySchedule,
    blackouts: &[BlackoutDate],
    rules: &BookingRules,
    bookings: &[ExistingBooking],
    target_date: NaiveDate,
) -> Result<Vec<Slot>> {
    compute_slots_at(schedule, blackouts, rules, bookings, target_date, Utc::now())
}

/// First slot on the date that a party of `party_size` can book, evaluated
/// against an explicit wall-clock instant.
///
/// # Errors
/// [`ConfigError::PartyBelowMinimum`] when the requested party is smaller
/// than `rules.min_party_size`, plus everything [`compute_slots_at`] rejects.
pub fn find_first_open_at(
    schedule: &WeeklySchedule,
    blackouts: &[BlackoutDate],
    rules: &BookingRules,
    bookings: &[ExistingBooking],
    target_date: NaiveDate,
    party_size: u32,
    now: DateTime<Utc>,
) -> Result<Option<Slot>> {
    if party_size < rules.min_party_size {
        return Err(ConfigError::PartyBelowMinimum {
            got: party_size,
            min: rules.min_party_size,
        });
    }

    let slots = compute_slots_at(schedule, blackouts, rules, bookings, target_date, now)?;
    Ok(slots.into_iter().find(|slot| slot.fits(party_size)))
}

/// [`find_first_open_at`] evaluated against the real wall clock.
pub fn find_first_open(
    schedule: &WeeklySchedule,
    blackouts: &[BlackoutDate],
    rules: &BookingRules,
    bookings: &[ExistingBooking],
    target_date: NaiveDate,
    party_size: u32,
) -> Result<Option<Slot>> {
    find_first_open_at(
        schedule,
        blackouts,
        rules,
        bookings,
        target_date,
        party_size,
        Utc::now(),
    )
}

/// Dates in `[start, start + days)` that are bookable at the day level: an
/// enabled weekday with hours that is not blacked out.
///
/// Feeds the widget's date picker. Capacity is deliberately not consulted --
/// a sold-out day still renders as an open date with zero available slots,
/// matching the slot list's include-sold-out output policy.
pub fn open_dates(
    schedule: &WeeklySchedule,
    blackouts: &[BlackoutDate],
    start: NaiveDate,
    days: u32,
) -> Vec<NaiveDate> {
    (0..days)
        .filter_map(|offset| start.checked_add_days(Days::new(u64::from(offset))))
        .filter(|date| {
            let day = schedule.day(date.weekday());
            day.enabled && !day.time_ranges.is_empty() && !is_blacked_out(blackouts, *date)
        })
        .collect()
}

/// Capacity accounting for one candidate interval.
fn build_slot(start: u32, end: u32, rules: &BookingRules, bookings: &[ExistingBooking]) -> Slot {
    let booked: u32 = bookings
        .iter()
        .filter(|b| {
            b.status.counts_against_capacity()
                && u32::from(b.slot_start) == start
                && u32::from(b.slot_end) == end
        })
        .map(|b| b.party_size)
        .sum();

    let remaining_capacity = rules.max_capacity_per_slot.saturating_sub(booked);
    let is_available = if rules.allow_join_existing {
        remaining_capacity > 0
    } else {
        booked == 0
    };

    Slot {
        start: start as u16,
        end: end as u16,
        remaining_capacity,
        is_available,
    }
}
