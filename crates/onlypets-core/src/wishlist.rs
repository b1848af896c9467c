//! # Wishlist
//!
//! A set of saved items keyed by identity. Toggling an item that is already
//! present removes it; toggling an absent item appends it, so toggling the
//! same item twice restores the original list.

use serde::{Deserialize, Serialize};

use crate::types::WishlistItem;

/// Result of a [`Wishlist::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Saved items in insertion order. An id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the item with the same id if present, otherwise appends it.
    pub fn toggle(&mut self, item: WishlistItem) -> Toggle {
        if self.contains(&item.id) {
            self.items.retain(|i| i.id != item.id);
            Toggle::Removed
        } else {
            self.items.push(item);
            Toggle::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
