//! # Error Types
//!
//! Domain-specific error types for onlypets-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  onlypets-core errors (this file)                                      │
//! │  ├── CoreError        - Parsing and lookup failures                    │
//! │  └── ValidationError  - Caller-side input checks                       │
//! │                                                                         │
//! │  onlypets-store errors (separate crate)                                │
//! │  ├── SourceError      - Data source failures (initial load only)       │
//! │  └── StoreError       - Configuration failures                         │
//! │                                                                         │
//! │  Store mutations never fail: invalid input degrades to a no-op.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// None of these come out of a store mutation. They are produced by
/// parsing (time slots, toast kinds, species) and by caller-side checks
/// performed before a mutation is dispatched.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Service cannot be found in the catalog.
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Unrecognised time slot name.
    #[error("Unknown time slot: '{0}'. Valid options: morning, afternoon, evening")]
    UnknownTimeSlot(String),

    /// Unrecognised toast kind.
    #[error("Unknown toast type: '{0}'. Valid options: success, error, info")]
    UnknownToastKind(String),

    /// Slot already taken for the requested service and date.
    #[error("{service_id} is already booked on {date} ({slot})")]
    SlotTaken {
        service_id: String,
        date: String,
        slot: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Date lies before the allowed range.
    #[error("{field} cannot be in the past: {date}")]
    DateInPast { field: String, date: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
