//! # Checkout Commands
//!
//! "Buy Now" hands a one-product array to an external checkout delegate.
//! Nothing is added to the cart and nothing is paid for here.

use async_trait::async_trait;
use storefront_core::validation::validate_product_id;
use storefront_core::{CoreError, Product};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Receives the products of a checkout request, exactly as passed.
#[async_trait]
pub trait CheckoutHandler: Send + Sync {
    async fn handle_checkout(&self, products: &[Product]) -> Result<(), ApiError>;
}

/// Prints the checkout request as a JSON array on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutCheckoutHandler;

#[async_trait]
impl CheckoutHandler for StdoutCheckoutHandler {
    async fn handle_checkout(&self, products: &[Product]) -> Result<(), ApiError> {
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        info!(?ids, "Checkout requested");

        let json = serde_json::to_string_pretty(products)
            .map_err(|e| ApiError::internal(format!("Checkout request could not be encoded: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}

/// "Buy Now" on a card.
pub async fn buy_now(
    catalog: &CatalogState,
    handler: &dyn CheckoutHandler,
    product_id: &str,
) -> Result<Vec<Product>, ApiError> {
    debug!(product_id = %product_id, "buy_now command");
    validate_product_id(product_id)?;

    let product = catalog
        .find(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    checkout(handler, vec![product]).await
}

/// "Buy Now" in the detail view.
pub async fn buy_selected(
    catalog: &CatalogState,
    handler: &dyn CheckoutHandler,
) -> Result<Vec<Product>, ApiError> {
    debug!("buy_selected command");
    let product = catalog.selected().ok_or(CoreError::NoProductSelected)?;

    checkout(handler, vec![product]).await
}

async fn checkout(
    handler: &dyn CheckoutHandler,
    products: Vec<Product>,
) -> Result<Vec<Product>, ApiError> {
    handler.handle_checkout(&products).await?;
    Ok(products)
}
