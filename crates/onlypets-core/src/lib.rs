//! # onlypets-core: Pure Domain Logic for the OnlyPets Storefront
//!
//! This crate holds every collection rule of the storefront as plain,
//! synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     OnlyPets Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (frontend)                             │   │
//! │  │   Adoption ──► Services ──► Products ──► Cart ──► Wishlist      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store operations                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    onlypets-store (AppStore)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ onlypets-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌────────┐  │   │
//! │  │   │  types  │ │  cart   │ │ wishlist │ │ booking │ │ toast  │  │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └─────────┘ └────────┘  │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐          │   │
//! │  │   │  money  │ │ images  │ │ catalog  │ │ validation │          │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └────────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO GLOBALS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Pet, Service, Product, Booking, Toast, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart with per-product quantity merge
//! - [`wishlist`] - Identity-keyed set of saved items
//! - [`booking`] - Booking ledger and conflict queries
//! - [`toast`] - Notification queue with monotonic ids
//! - [`images`] - Entity to image URL resolution
//! - [`catalog`] - Static service and product catalogs
//! - [`validation`] - Caller-side input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use onlypets_core::cart::Cart;
//! use onlypets_core::{Money, Product};
//!
//! let chew_toy = Product::new("p1", "Chew Toy", Money::from_cents(45_000));
//!
//! let mut cart = Cart::new();
//! cart.add(&chew_toy);
//! cart.add(&chew_toy);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.subtotal().cents(), 90_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod booking;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod images;
pub mod money;
pub mod toast;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of image URLs resolved for every pet.
pub const PET_IMAGE_COUNT: usize = 3;

/// Days ahead of "today" used for the seeded conflict booking.
pub const DEFAULT_BOOKING_SEED_OFFSET_DAYS: i64 = 5;

/// Largest accepted seed offset, in days.
pub const MAX_BOOKING_SEED_OFFSET_DAYS: i64 = 365;
