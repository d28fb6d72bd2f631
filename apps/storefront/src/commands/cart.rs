//! # Cart Commands
//!
//! Adding to, reading and clearing the persisted cart.
//!
//! ## Entry Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Add to Cart" on a card ─────► add_to_cart(id) ──────────┐            │
//! │                                                           ▼            │
//! │  "Add to Cart" in detail ─────► add_selected_to_cart() ──► CartState   │
//! │                                                           ::add        │
//! │  cart badge / page ───────────► get_cart()                             │
//! │  clear ───────────────────────► clear_cart()                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use storefront_core::cart::CartTotals;
use storefront_core::validation::validate_product_id;
use storefront_core::{CartEntry, CoreError};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartEntry>,
    pub totals: CartTotals,
}

impl From<Vec<CartEntry>> for CartResponse {
    fn from(items: Vec<CartEntry>) -> Self {
        let totals = CartTotals::from(items.as_slice());
        CartResponse { items, totals }
    }
}

/// Adds the catalog product `product_id` to the cart.
pub async fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");
    validate_product_id(product_id)?;

    let product = catalog
        .find(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    Ok(cart.add(Some(&product)).await?.into())
}

/// Adds the product open in the detail view.
pub async fn add_selected_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
) -> Result<CartResponse, ApiError> {
    debug!("add_selected_to_cart command");
    let selected = catalog.selected();
    Ok(cart.add(selected.as_ref()).await?.into())
}

/// Gets the current cart contents.
pub async fn get_cart(cart: &CartState) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    Ok(cart.entries().await?.into())
}

/// Empties the cart.
pub async fn clear_cart(cart: &CartState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");
    cart.clear().await?;
    Ok(Vec::new().into())
}
