//! Read-only shapes handed to the view layer.

use serde::Serialize;
use ts_rs::TS;

use onlypets_core::cart::{CartItem, CartTotals};
use onlypets_core::{Booking, Pet, Product, Service, Toast, WishlistItem};

/// Counts rendered on the header's wishlist and cart icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HeaderBadges {
    pub wishlist_count: usize,
    /// Sum of quantities, not the number of distinct products.
    #[ts(type = "number")]
    pub cart_quantity: u64,
}

/// Full copy of the session taken under a single read lock.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    #[ts(type = "number")]
    pub revision: u64,
    pub pets: Vec<Pet>,
    pub services: Vec<Service>,
    pub products: Vec<Product>,
    pub wishlist: Vec<WishlistItem>,
    pub cart: Vec<CartItem>,
    pub cart_totals: CartTotals,
    pub bookings: Vec<Booking>,
    pub toasts: Vec<Toast>,
    pub is_auth_modal_open: bool,
    pub loading: bool,
    pub error: Option<String>,
}
