//! Error types for slot-engine operations.

use chrono::{NaiveDate, Weekday};
use thiserror::Error;

/// Configuration the engine cannot reasonably interpret.
///
/// These are surfaced immediately and never retried; a legitimately empty
/// day (blackout, closed weekday, fully booked) is an empty slot list, not
/// an error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Slot interval must be positive (got {0})")]
    InvalidInterval(u32),

    #[error("Slot duration must be positive (got {0})")]
    InvalidDuration(u32),

    #[error("Slot capacity must be positive (got {0})")]
    InvalidCapacity(u32),

    #[error("Invalid time range {start}..{end}: need 0 <= start < end <= 1440")]
    InvalidTimeRange { start: u16, end: u16 },

    #[error("Time ranges on {weekday} overlap or are out of order at {start}..{end}")]
    UnorderedRanges {
        weekday: Weekday,
        start: u16,
        end: u16,
    },

    #[error("{weekday} is closed but still has {count} time ranges")]
    ClosedDayWithRanges { weekday: Weekday, count: usize },

    #[error("{weekday} is open but has no time ranges")]
    OpenDayWithoutRanges { weekday: Weekday },

    #[error("Duplicate blackout date: {0}")]
    DuplicateBlackout(NaiveDate),

    #[error("Party size {got} is below the minimum of {min}")]
    PartyBelowMinimum { got: u32, min: u32 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
