//! Read-only snapshot of existing bookings, owned by the booking store.
//!
//! The engine never queries storage itself; the caller passes the bookings
//! for the target resource and date, and re-derives capacity transactionally
//! at reservation-commit time. Slot computation here is advisory.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    Cancelled,
}

impl BookingStatus {
    /// Only cancelled bookings release their seats.
    pub fn counts_against_capacity(self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// One existing booking on the target date, pre-filtered by the caller to the
/// same resource and date the slots are being computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingBooking {
    /// Booked slot start, minutes since midnight.
    pub slot_start: u16,
    /// Booked slot end, minutes since midnight.
    pub slot_end: u16,
    pub party_size: u32,
    pub status: BookingStatus,
}
