//! # Cart
//!
//! The shopping cart: a mapping from product identity to a purchase quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  View Action              Cart Method               Effect              │
//! │  ───────────              ───────────               ──────              │
//! │                                                                         │
//! │  Add to cart ───────────► add() ──────────────────► qty += 1 or push    │
//! │                                                                         │
//! │  Change quantity ───────► update_quantity(n) ─────► n <= 0 → remove     │
//! │                                                     else  → qty = n     │
//! │                                                                         │
//! │  Remove ────────────────► remove() ───────────────► retain != id        │
//! │                                                                         │
//! │  Checkout / cancel ─────► clear() ────────────────► items.clear()       │
//! │                                                                         │
//! │  NOTE: No operation fails. Unknown ids are no-ops.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// A product in the cart with its quantity.
///
/// The product fields are a snapshot taken when the item was first added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Always >= 1 while the item is in the cart.
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartUpdate {
    /// Quantity was set to the requested value.
    Set(u32),
    /// Requested quantity was zero or negative and the item was removed.
    Removed,
    /// Product was not in the cart; nothing changed.
    Missing,
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one item per product id (adding again increments quantity)
/// - Every item has `quantity >= 1`
/// - Items keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`.
    ///
    /// Returns the item's quantity after the add.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        1
    }

    /// Removes the item for `product_id`. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.items.len() != initial_len
    }

    /// Sets the quantity for `product_id`.
    ///
    /// A quantity of zero or below behaves exactly like [`Cart::remove`].
    /// Values above `u32::MAX` saturate.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CartUpdate {
        if quantity <= 0 {
            return if self.remove(product_id) {
                CartUpdate::Removed
            } else {
                CartUpdate::Missing
            };
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                CartUpdate::Set(quantity)
            }
            None => CartUpdate::Missing,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities (the header badge count).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

/// Cart totals summary for views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(cents))
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let mut cart = Cart::new();
        let p = product("p1", 999);

        assert_eq!(cart.add(&p), 1);
        assert_eq!(cart.add(&p), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("p1").map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_quantity_scenario() {
        let mut cart = Cart::new();
        let p = product("p1", 999);

        cart.add(&p);
        cart.add(&p);
        assert_eq!(cart.update_quantity("p1", 1), CartUpdate::Set(1));
        assert_eq!(cart.total_quantity(), 1);
        assert!(cart.remove("p1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_non_positive_quantity_removes() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 100));
        cart.add(&product("p2", 100));

        assert_eq!(cart.update_quantity("p1", 0), CartUpdate::Removed);
        assert_eq!(cart.update_quantity("p2", -5), CartUpdate::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 100));
        let before = cart.clone();

        assert!(!cart.remove("nope"));
        assert_eq!(cart.update_quantity("nope", 4), CartUpdate::Missing);
        assert_eq!(cart.update_quantity("nope", 0), CartUpdate::Missing);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 45_000));
        cart.add(&product("p1", 45_000));
        cart.add(&product("p2", 12_050));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal.cents(), 102_050);
    }

    #[test]
    fn test_item_serializes_flat() {
        let mut cart = Cart::new();
        cart.add(&product("p1", 100));
        let json = serde_json::to_value(&cart.items()[0]).unwrap();
        assert_eq!(json["id"], "p1");
        assert_eq!(json["quantity"], 1);
    }
}
