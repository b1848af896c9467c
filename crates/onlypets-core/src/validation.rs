//! # Validation Module
//!
//! Caller-side checks run by views before dispatching a store operation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form inputs                                                  │
//! │  └── required fields, date pickers                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── booking date, known service, non-empty ids                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: AppStore                                                     │
//! │  └── accepts everything; invalid input degrades to a no-op             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Booking, Service};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length accepted for entity ids.
pub const MAX_ID_LEN: usize = 64;

/// Validates an entity id (non-empty after trim, bounded length).
///
/// ```rust
/// use onlypets_core::validation::validate_id;
///
/// assert!(validate_id("productId", "prod_01").is_ok());
/// assert!(validate_id("productId", "  ").is_err());
/// ```
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Rejects booking dates before `today`. Same-day bookings are allowed.
pub fn validate_booking_date(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::DateInPast {
            field: "date".to_string(),
            date: date.to_string(),
        });
    }
    Ok(())
}

/// Full pre-submit check for a booking form.
///
/// Verifies the service exists in `services` and the date is not in the
/// past. Conflict checking is separate (see `BookingLedger::has_conflict`).
pub fn validate_booking(booking: &Booking, services: &[Service], today: NaiveDate) -> CoreResult<()> {
    validate_id("serviceId", &booking.service_id)?;

    if !services.iter().any(|s| s.id == booking.service_id) {
        return Err(CoreError::ServiceNotFound(booking.service_id.clone()));
    }

    validate_booking_date(booking.date, today)?;
    Ok(())
}
