//! # slot-engine
//!
//! Availability slot computation for TicketFlo resource bookings.
//!
//! Given a resource's weekly operating-hours template, blackout dates,
//! booking rules, and a snapshot of existing bookings, the engine produces
//! the ordered list of bookable slots for a requested date, annotated with
//! remaining capacity. It is a pure function of its inputs: no storage, no
//! I/O, no shared state, safe to call concurrently from any request handler.
//!
//! ## Modules
//!
//! - [`schedule`] — weekly operating-hours templates and their validation
//! - [`blackout`] — full-day closures, one-off and recurring
//! - [`rules`] — per-resource booking policy and vertical presets
//! - [`booking`] — read-only snapshot of existing bookings
//! - [`slots`] — the slot computation itself
//! - [`error`] — error types

pub mod blackout;
pub mod booking;
pub mod error;
pub mod rules;
pub mod schedule;
pub mod slots;

pub use blackout::{is_blacked_out, validate_blackouts, BlackoutDate};
pub use booking::{BookingStatus, ExistingBooking};
pub use error::ConfigError;
pub use rules::{BookingRules, RuleOverrides, Vertical};
pub use schedule::{format_minute_of_day, DaySchedule, TimeRange, WeeklySchedule};
pub use slots::{
    compute_slots, compute_slots_at, find_first_open, find_first_open_at, open_dates, Slot,
};
