//! Per-resource booking policy.
//!
//! [`BookingRules`] is the normalized policy the engine consumes: slot
//! spacing, slot duration, per-slot capacity, party-size floor, join policy,
//! and the venue's IANA timezone. Vertical-specific shapes (golf tee sheets,
//! salon chairs, entertainment lanes) are expressed as [`Vertical`] defaults
//! with optional [`RuleOverrides`] layered on top, resolved once before the
//! engine runs so the slot walk stays vertical-agnostic.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Normalized booking policy for one resource.
///
/// `timezone` is mandatory. Operating hours are local to the venue, so
/// defaulting to UTC would silently shift every slot boundary; a missing or
/// unparseable identifier is a configuration error, never a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRules {
    /// Spacing between slot start times, e.g. a 10-minute tee interval.
    pub slot_interval_minutes: u32,
    /// Length of each bookable slot.
    pub default_duration_minutes: u32,
    /// Maximum total party size a single slot can hold.
    pub max_capacity_per_slot: u32,
    /// Smallest party a booking may be made for.
    #[serde(default = "default_min_party")]
    pub min_party_size: u32,
    /// Whether additional parties may join a slot that already has bookings,
    /// up to capacity.
    pub allow_join_existing: bool,
    /// IANA timezone identifier all date/time math runs in.
    pub timezone: String,
}

fn default_min_party() -> u32 {
    1
}

impl BookingRules {
    /// Reject rules the slot walk cannot interpret.
    pub fn validate(&self) -> Result<()> {
        if self.slot_interval_minutes == 0 {
            return Err(ConfigError::InvalidInterval(self.slot_interval_minutes));
        }
        if self.default_duration_minutes == 0 {
            return Err(ConfigError::InvalidDuration(self.default_duration_minutes));
        }
        if self.max_capacity_per_slot == 0 {
            return Err(ConfigError::InvalidCapacity(self.max_capacity_per_slot));
        }
        self.tz()?;
        Ok(())
    }

    /// Parse the configured timezone.
    pub fn tz(&self) -> Result<chrono_tz::Tz> {
        self.timezone
            .parse()
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }
}

/// Business vertical a resource belongs to.
///
/// Each vertical carries the booking defaults its config editor starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Vertical {
    #[default]
    General,
    Golf,
    Salon,
    Entertainment,
}

impl Vertical {
    /// Default rules for this vertical, before per-resource overrides.
    pub fn base_rules(self, timezone: impl Into<String>) -> BookingRules {
        let timezone = timezone.into();
        match self {
            // Hourly general admission, ten parties per slot.
            Vertical::General => BookingRules {
                slot_interval_minutes: 60,
                default_duration_minutes: 60,
                max_capacity_per_slot: 10,
                min_party_size: 1,
                allow_join_existing: true,
                timezone,
            },
            // Tee sheet: 10-minute intervals, foursomes, joinable groups.
            Vertical::Golf => BookingRules {
                slot_interval_minutes: 10,
                default_duration_minutes: 10,
                max_capacity_per_slot: 4,
                min_party_size: 1,
                allow_join_existing: true,
                timezone,
            },
            // One chair per appointment; nobody joins a running service.
            Vertical::Salon => BookingRules {
                slot_interval_minutes: 30,
                default_duration_minutes: 60,
                max_capacity_per_slot: 1,
                min_party_size: 1,
                allow_join_existing: false,
                timezone,
            },
            // Lanes and party rooms: staggered starts, large shared capacity.
            Vertical::Entertainment => BookingRules {
                slot_interval_minutes: 30,
                default_duration_minutes: 90,
                max_capacity_per_slot: 20,
                min_party_size: 1,
                allow_join_existing: true,
                timezone,
            },
        }
    }
}

/// Per-resource overrides layered onto a vertical's defaults.
///
/// Every field is optional; `None` keeps the vertical default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleOverrides {
    pub slot_interval_minutes: Option<u32>,
    pub default_duration_minutes: Option<u32>,
    pub max_capacity_per_slot: Option<u32>,
    pub min_party_size: Option<u32>,
    pub allow_join_existing: Option<bool>,
    pub timezone: Option<String>,
}

impl RuleOverrides {
    /// Resolve this override set against a base rule set, field by field.
    pub fn apply_to(&self, base: BookingRules) -> BookingRules {
        BookingRules {
            slot_interval_minutes: self
                .slot_interval_minutes
                .unwrap_or(base.slot_interval_minutes),
            default_duration_minutes: self
                .default_duration_minutes
                .unwrap_or(base.default_duration_minutes),
            max_capacity_per_slot: self
                .max_capacity_per_slot
                .unwrap_or(base.max_capacity_per_slot),
            min_party_size: self.min_party_size.unwrap_or(base.min_party_size),
            allow_join_existing: self.allow_join_existing.unwrap_or(base.allow_join_existing),
            timezone: self.timezone.clone().unwrap_or(base.timezone),
        }
    }
}
