//! Blackout dates: full-day closures layered over the weekly template.
//!
//! A blackout either names one calendar date or recurs on the same month/day
//! every year (seasonal closure, annual maintenance day). Recurrence is a
//! month/day match: a Feb 29 entry fires only in leap years and never shadows
//! Feb 28 or Mar 1.

use crate::error::{ConfigError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A full-day closure for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutDate {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
}

impl BlackoutDate {
    /// Whether this entry closes the given date.
    pub fn applies_on(&self, date: NaiveDate) -> bool {
        if self.is_recurring {
            self.date.month() == date.month() && self.date.day() == date.day()
        } else {
            self.date == date
        }
    }
}

/// Whether any blackout entry closes the given date.
pub fn is_blacked_out(blackouts: &[BlackoutDate], date: NaiveDate) -> bool {
    blackouts.iter().any(|b| b.applies_on(date))
}

/// Reject duplicate dates at config-write time.
///
/// At most one entry may name a given date; the dashboard edits blackouts by
/// date, so a duplicate would make one of the two rows unreachable.
pub fn validate_blackouts(blackouts: &[BlackoutDate]) -> Result<()> {
    let mut seen = HashSet::new();
    for blackout in blackouts {
        if !seen.insert(blackout.date) {
            return Err(ConfigError::DuplicateBlackout(blackout.date));
        }
    }
    Ok(())
}
