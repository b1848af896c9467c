//! # Booking Ledger
//!
//! Records service bookings. The ledger never refuses a booking; conflict
//! checking is a read-side query the caller runs before recording one.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Booking form submit                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ledger.has_conflict(&booking) ◄── caller decides the policy           │
//! │       │                                                                 │
//! │       ├── true  → show "slot taken" toast, pick another slot           │
//! │       │                                                                 │
//! │       └── false → ledger.record(booking) → confirmation view           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Booking, TimeSlot};

/// Append-only list of bookings in submission order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a booking. Duplicates are stored as-is.
    pub fn record(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// True when an existing booking has the same service, date and slot.
    pub fn has_conflict(&self, booking: &Booking) -> bool {
        self.bookings.iter().any(|b| b.conflicts_with(booking))
    }

    /// Returns `Err(SlotTaken)` when the booking would conflict.
    ///
    /// Convenience for callers that enforce a reject-on-conflict policy.
    pub fn check_available(&self, booking: &Booking) -> CoreResult<()> {
        if self.has_conflict(booking) {
            return Err(CoreError::SlotTaken {
                service_id: booking.service_id.clone(),
                date: booking.date.to_string(),
                slot: booking.time_slot.to_string(),
            });
        }
        Ok(())
    }

    /// Slots already taken for a service on a given day, in slot order.
    pub fn booked_slots(&self, service_id: &str, date: NaiveDate) -> Vec<TimeSlot> {
        TimeSlot::ALL
            .into_iter()
            .filter(|slot| {
                self.bookings
                    .iter()
                    .any(|b| b.service_id == service_id && b.date == date && b.time_slot == *slot)
            })
            .collect()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl From<Vec<Booking>> for BookingLedger {
    fn from(bookings: Vec<Booking>) -> Self {
        BookingLedger { bookings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_duplicate_bookings_are_both_recorded() {
        let mut ledger = BookingLedger::new();
        let booking = Booking::new("service_01", day(20), TimeSlot::Morning);

        ledger.record(booking.clone());
        assert!(ledger.has_conflict(&booking));
        ledger.record(booking);

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_check_available() {
        let mut ledger = BookingLedger::new();
        ledger.record(Booking::new("service_01", day(20), TimeSlot::Morning));

        let taken = Booking::new("service_01", day(20), TimeSlot::Morning);
        let free = Booking::new("service_01", day(20), TimeSlot::Afternoon);

        assert!(matches!(
            ledger.check_available(&taken),
            Err(CoreError::SlotTaken { .. })
        ));
        assert!(ledger.check_available(&free).is_ok());
    }

    #[test]
    fn test_booked_slots_are_deduplicated_and_ordered() {
        let mut ledger = BookingLedger::new();
        ledger.record(Booking::new("service_02", day(21), TimeSlot::Evening));
        ledger.record(Booking::new("service_02", day(21), TimeSlot::Morning));
        ledger.record(Booking::new("service_02", day(21), TimeSlot::Evening));
        ledger.record(Booking::new("service_03", day(21), TimeSlot::Afternoon));

        assert_eq!(
            ledger.booked_slots("service_02", day(21)),
            vec![TimeSlot::Morning, TimeSlot::Evening]
        );
        assert!(ledger.booked_slots("service_02", day(22)).is_empty());
    }
}
