//! # Cart Merge
//!
//! The pure half of the cart accumulator. Loading and saving the list is the
//! job of a `CartRepository` in storefront-db; this module only decides what
//! the list looks like after an add.
//!
//! ## Merge Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  merge_product(entries, product)                                        │
//! │                                                                         │
//! │  entry with same id?                                                    │
//! │      ├── yes → entry.quantity += 1   (missing quantity counts as 0)    │
//! │      └── no  → push { ...product, quantity: 1 }                         │
//! │                                                                         │
//! │  Invariant: at most one entry per product id                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CartEntry, Product};

/// Merges one unit of `product` into `entries` and returns its new quantity.
///
/// ## Example
/// ```rust
/// use storefront_core::cart::merge_product;
/// use storefront_core::Product;
///
/// let pipe = Product::new("1", "PVC Pipe 20mm", "Supreme", 150.0, 4.5);
/// let mut cart = Vec::new();
///
/// merge_product(&mut cart, &pipe);
/// merge_product(&mut cart, &pipe);
///
/// assert_eq!(cart.len(), 1);
/// assert_eq!(cart[0].quantity, 2);
/// ```
pub fn merge_product(entries: &mut Vec<CartEntry>, product: &Product) -> u32 {
    if let Some(entry) = entries.iter_mut().find(|e| e.id() == product.id) {
        entry.quantity = entry.quantity.saturating_add(1);
        return entry.quantity;
    }

    entries.push(CartEntry::new(product));
    1
}

/// Folds entries that share an id into the first of them, summing quantities.
///
/// Stored carts written by other clients can break the one-entry-per-id
/// invariant; loading runs through this to restore it.
pub fn collapse_duplicates(entries: Vec<CartEntry>) -> Vec<CartEntry> {
    let mut out: Vec<CartEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        match out.iter_mut().find(|e| e.id() == entry.id()) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(entry.quantity);
            }
            None => out.push(entry),
        }
    }
    out
}

// =============================================================================
// Totals
// =============================================================================

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct products.
    pub item_count: usize,
    /// Sum of all quantities.
    pub total_quantity: u64,
    /// Sum of price × quantity.
    pub subtotal: f64,
}

impl From<&[CartEntry]> for CartTotals {
    fn from(entries: &[CartEntry]) -> Self {
        CartTotals {
            item_count: entries.len(),
            total_quantity: entries.iter().map(|e| u64::from(e.quantity)).sum(),
            subtotal: entries.iter().map(CartEntry::line_total).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product::new(id, format!("Product {}", id), "Supreme", price, 4.0)
    }

    #[test]
    fn test_same_product_twice_increments() {
        let mut cart = Vec::new();
        let pipe = product("1", 150.0);

        assert_eq!(merge_product(&mut cart, &pipe), 1);
        assert_eq!(merge_product(&mut cart, &pipe), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn test_distinct_products_get_their_own_entries() {
        let mut cart = Vec::new();
        merge_product(&mut cart, &product("1", 150.0));
        merge_product(&mut cart, &product("2", 40.0));

        assert_eq!(cart.len(), 2);
        assert!(cart.iter().all(|e| e.quantity == 1));
        assert_eq!(cart[0].id(), "1");
        assert_eq!(cart[1].id(), "2");
    }

    #[test]
    fn test_missing_quantity_counts_from_zero() {
        let mut cart = vec![CartEntry {
            product: product("1", 150.0),
            quantity: 0,
        }];

        assert_eq!(merge_product(&mut cart, &product("1", 150.0)), 1);
    }

    #[test]
    fn test_existing_entry_keeps_its_snapshot() {
        let mut cart = vec![CartEntry::new(&product("1", 150.0))];
        merge_product(&mut cart, &product("1", 999.0));

        assert_eq!(cart[0].product.price, 150.0);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn test_collapse_duplicates() {
        let mut a = CartEntry::new(&product("1", 10.0));
        a.quantity = 2;
        let b = CartEntry::new(&product("2", 20.0));
        let mut c = CartEntry::new(&product("1", 10.0));
        c.quantity = 3;

        let collapsed = collapse_duplicates(vec![a, b, c]);
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].quantity, 5);
        assert_eq!(collapsed[1].id(), "2");
    }

    #[test]
    fn test_totals() {
        let mut cart = Vec::new();
        merge_product(&mut cart, &product("1", 150.0));
        merge_product(&mut cart, &product("1", 150.0));
        merge_product(&mut cart, &product("2", 40.0));

        let totals = CartTotals::from(cart.as_slice());
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal, 340.0);
    }
}
