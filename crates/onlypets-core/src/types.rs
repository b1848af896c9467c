//! # Domain Types
//!
//! Core domain records used throughout the storefront.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Pet        │   │    Service      │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  species/breed  │   │  price (Money)  │   │  price (Money)  │       │
//! │  │  age_months     │   │  duration       │   │  category       │       │
//! │  │  image_urls     │   │  activities     │   │  image_url      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  WishlistItem   │   │    Booking      │   │     Toast       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (set key)   │   │  service_id     │   │  id (monotonic) │       │
//! │  │  kind           │   │  date           │   │  message        │       │
//! │  │  name/image     │   │  time_slot      │   │  kind           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CartItem` lives in [`crate::cart`] next to the rules that maintain it.
//!
//! All records serialize with camelCase keys; the frontend consumes them
//! through the generated TypeScript bindings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::images::{self, ImageResolver};
use crate::money::Money;

// =============================================================================
// Pet
// =============================================================================

/// Animal species offered for adoption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Dog,
    Cat,
    Rabbit,
    Bird,
    Other,
}

impl Species {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Rabbit => "rabbit",
            Species::Bird => "bird",
            Species::Other => "other",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PetSize {
    Small,
    Medium,
    Large,
}

/// A pet listed for adoption.
///
/// Pets are immutable once loaded; a change means replacing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    /// Age in whole months.
    pub age_months: u32,
    pub gender: Gender,
    pub size: PetSize,
    pub description: String,
    /// Short personality traits ("playful", "calm", ...).
    pub temperament: Vec<String>,
    /// Filled by the image resolver when the store loads.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Pet {
    /// Human-readable age ("8 months", "2 years").
    pub fn age_label(&self) -> String {
        match self.age_months {
            1 => "1 month".to_string(),
            m if m < 12 => format!("{} months", m),
            m if m < 24 => "1 year".to_string(),
            m => format!("{} years", m / 12),
        }
    }

    /// Returns a copy with image URLs filled in by `resolver`.
    pub fn with_resolved_images(mut self, resolver: &ImageResolver) -> Self {
        self.image_urls = resolver.pet_images(&self);
        self
    }
}

// =============================================================================
// Service
// =============================================================================

/// A bookable care service (grooming, vet checkup, training, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    /// Duration of one session in minutes.
    pub duration_minutes: u32,
    pub activities: Vec<String>,
    pub notes: String,
    #[serde(default)]
    pub image_url: String,
}

impl Service {
    /// Returns a copy with its image URL filled in by `resolver`.
    pub fn with_resolved_image(mut self, resolver: &ImageResolver) -> Self {
        self.image_url = resolver.service_image(&self);
        self
    }
}

// =============================================================================
// Product
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Food,
    Toys,
    #[default]
    Accessories,
    Grooming,
    Health,
}

/// A product sold in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub category: ProductCategory,
    pub image_url: String,
}

impl Product {
    /// Creates a product with the default category and placeholder image.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            category: ProductCategory::default(),
            image_url: images::DEFAULT_PRODUCT_IMAGE.to_string(),
        }
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }
}

// =============================================================================
// Wishlist Item
// =============================================================================

/// What kind of entity a wishlist entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WishlistKind {
    Pet,
    Service,
    Product,
}

/// A saved entry on the wishlist. The `id` is the set key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub kind: WishlistKind,
}

impl From<&Pet> for WishlistItem {
    fn from(pet: &Pet) -> Self {
        WishlistItem {
            id: pet.id.clone(),
            name: pet.name.clone(),
            image_url: pet
                .image_urls
                .first()
                .cloned()
                .unwrap_or_else(|| images::DEFAULT_PET_IMAGE.to_string()),
            kind: WishlistKind::Pet,
        }
    }
}

impl From<&Service> for WishlistItem {
    fn from(service: &Service) -> Self {
        WishlistItem {
            id: service.id.clone(),
            name: service.name.clone(),
            image_url: service.image_url.clone(),
            kind: WishlistKind::Service,
        }
    }
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        WishlistItem {
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            kind: WishlistKind::Product,
        }
    }
}

// =============================================================================
// Booking
// =============================================================================

/// Part of the day a service is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            other => Err(CoreError::UnknownTimeSlot(other.to_string())),
        }
    }
}

/// A reservation of a service on a calendar day and time slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub service_id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
}

impl Booking {
    pub fn new(service_id: impl Into<String>, date: NaiveDate, time_slot: TimeSlot) -> Self {
        Booking {
            service_id: service_id.into(),
            date,
            time_slot,
        }
    }

    /// Two bookings conflict when service, date and slot all match.
    pub fn conflicts_with(&self, other: &Booking) -> bool {
        self.service_id == other.service_id
            && self.date == other.date
            && self.time_slot == other.time_slot
    }
}

// =============================================================================
// Toast
// =============================================================================

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl FromStr for ToastKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(ToastKind::Success),
            "error" => Ok(ToastKind::Error),
            "info" => Ok(ToastKind::Info),
            other => Err(CoreError::UnknownToastKind(other.to_string())),
        }
    }
}

/// Identifier of an active toast. Monotonic within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transient, dismissible notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
