//! Weekly operating-hours templates.
//!
//! A [`WeeklySchedule`] maps every weekday to a [`DaySchedule`] of open time
//! ranges, expressed as minute-of-day integers rather than "HH:MM" strings so
//! that range math never falls into string-comparison traps. One entry per
//! weekday always exists by construction.
//!
//! Validation here is for config-write time (the admin dashboard rejects a
//! malformed template before it is saved). The slot walk itself trusts the
//! stored template and processes ranges in the order they appear.

use crate::error::{ConfigError, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Minutes in a day; range ends are allowed to touch midnight exactly.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A half-open `[start, end)` window within a single day, in minutes since
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u16,
    pub end: u16,
}

impl TimeRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Length of the range in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    fn validate(&self) -> Result<()> {
        if self.start >= self.end || self.end > MINUTES_PER_DAY {
            return Err(ConfigError::InvalidTimeRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Operating hours for one weekday.
///
/// A closed day carries no ranges; an open day carries at least one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub enabled: bool,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
}

impl DaySchedule {
    /// A day with no bookable hours.
    pub fn closed() -> Self {
        Self {
            enabled: false,
            time_ranges: Vec::new(),
        }
    }

    /// An open day with the given ranges.
    pub fn open(time_ranges: Vec<TimeRange>) -> Self {
        Self {
            enabled: true,
            time_ranges,
        }
    }

    fn validate(&self, weekday: Weekday) -> Result<()> {
        if !self.enabled {
            if !self.time_ranges.is_empty() {
                return Err(ConfigError::ClosedDayWithRanges {
                    weekday,
                    count: self.time_ranges.len(),
                });
            }
            return Ok(());
        }

        if self.time_ranges.is_empty() {
            return Err(ConfigError::OpenDayWithoutRanges { weekday });
        }

        for range in &self.time_ranges {
            range.validate()?;
        }

        // Ranges must be sorted and non-overlapping; a later range starting
        // before the previous one ends would emit duplicate or out-of-order
        // slots downstream.
        for pair in self.time_ranges.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(ConfigError::UnorderedRanges {
                    weekday,
                    start: pair[1].start,
                    end: pair[1].end,
                });
            }
        }

        Ok(())
    }
}

/// Operating hours for every weekday of a resource.
///
/// Exactly seven entries, one per weekday, always present even when closed --
/// the shape the admin dashboard persists per resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

impl WeeklySchedule {
    /// A schedule with every day closed.
    pub fn closed() -> Self {
        Self::uniform(DaySchedule::closed())
    }

    /// The same hours applied to all seven days.
    pub fn uniform(day: DaySchedule) -> Self {
        Self {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: day.clone(),
            saturday: day.clone(),
            sunday: day,
        }
    }

    /// Look up the template for a weekday.
    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Validate the whole template: closed days carry no ranges, open days
    /// carry sorted, non-overlapping, in-bounds ranges.
    pub fn validate(&self) -> Result<()> {
        const WEEKDAYS: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for weekday in WEEKDAYS {
            self.day(weekday).validate(weekday)?;
        }
        Ok(())
    }
}

/// Render a minute-of-day as "HH:MM" for display surfaces.
pub fn format_minute_of_day(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}
