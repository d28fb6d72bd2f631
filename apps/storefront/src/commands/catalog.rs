//! # Catalog Commands
//!
//! Loading the catalog, listing the grid, and opening or closing the
//! detail view.
//!
//! ## Grid Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_catalog ──► set_products ──► filtered list                       │
//! │                                         │                               │
//! │  list_products(criteria, query)         │                               │
//! │     ├── criteria changed? ──► set_criteria ──► filtered list           │
//! │     └── search ─────────────────────────┴──► visible ──► cards         │
//! │                                                                         │
//! │  open_product(id) ──► selection ──► detail                             │
//! │  close_product()  ──► no selection                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_catalog::{CatalogLoader, ProductSource};
use storefront_core::validation::{validate_criteria, validate_product_id, validate_search_query};
use storefront_core::view::{DisplayOptions, ProductCard, ProductDetail};
use storefront_core::FilterCriteria;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::CatalogState;

/// Fetches the catalog (once per loader) into the catalog state.
///
/// Never fails: a failed fetch leaves the grid empty.
pub async fn load_catalog<S: ProductSource>(
    loader: &CatalogLoader<S>,
    catalog: &CatalogState,
) -> usize {
    let products = loader.products().await;
    let count = products.len();
    catalog.set_products(products);
    debug!(count, "load_catalog command");
    count
}

/// Applies `criteria` and `search_query` and returns the visible cards.
///
/// ## Behavior
/// - The filtered list is only recomputed when `criteria` differs from the
///   current criteria
/// - Ranges or ratings that can never match are logged, not rejected
/// - An over-long query is a validation error
pub fn list_products(
    catalog: &CatalogState,
    criteria: FilterCriteria,
    search_query: &str,
    display: &DisplayOptions,
) -> Result<Vec<ProductCard>, ApiError> {
    debug!(?criteria, query = %search_query, "list_products command");

    let query = validate_search_query(search_query)?;
    for problem in validate_criteria(&criteria) {
        warn!(%problem, "Criterion can never match");
    }

    if catalog.criteria() != criteria {
        catalog.set_criteria(criteria);
    }
    catalog.set_search_query(query);

    Ok(catalog
        .visible()
        .iter()
        .map(|p| ProductCard::from_product(p, display))
        .collect())
}

/// Selects a product and returns its detail view.
pub fn open_product(
    catalog: &CatalogState,
    product_id: &str,
    display: &DisplayOptions,
) -> Result<ProductDetail, ApiError> {
    debug!(product_id = %product_id, "open_product command");
    validate_product_id(product_id)?;

    let product = catalog.select(product_id)?;
    Ok(ProductDetail::from_product(&product, display))
}

/// Closes the detail view.
pub fn close_product(catalog: &CatalogState) {
    debug!("close_product command");
    catalog.clear_selection();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use async_trait::async_trait;
    use storefront_catalog::{CatalogError, CatalogResult};
    use storefront_core::Product;

    struct FixedSource(Vec<Product>);

    #[async_trait]
    impl ProductSource for FixedSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Ok(self.0.clone())
        }
    }

    struct DownSource;

    #[async_trait]
    impl ProductSource for DownSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            Err(CatalogError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            })
        }
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new("1", "PVC Pipe 20mm", "Supreme", 150.0, 4.5).with_stock(12.0),
            Product::new("2", "Ball Valve", "Astral", 250.0, 3.0),
            Product::new("3", "CPVC Pipe 15mm", "Astral", 180.0, 3.5),
        ]
    }

    async fn loaded() -> CatalogState {
        let catalog = CatalogState::new();
        let loader = CatalogLoader::new(FixedSource(products()));
        assert_eq!(load_catalog(&loader, &catalog).await, 3);
        catalog
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_grid_empty() {
        let catalog = CatalogState::new();
        let loader = CatalogLoader::new(DownSource);

        assert_eq!(load_catalog(&loader, &catalog).await, 0);
        let cards = list_products(&catalog, FilterCriteria::default(), "", &DisplayOptions::default())
            .unwrap();
        assert!(cards.is_empty());
    }

    #[tokio::test]
    async fn test_list_with_criteria_and_search() {
        let catalog = loaded().await;
        let display = DisplayOptions::default();

        let criteria = FilterCriteria::default()
            .with_brand("Astral")
            .with_rating("3")
            .with_rating("4");
        let cards = list_products(&catalog, criteria.clone(), "pipe", &display).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "3");
        assert_eq!(cards[0].price_label, "₹180");

        let revision = catalog.revision();
        let cards = list_products(&catalog, criteria, "valve", &display).unwrap();
        assert_eq!(catalog.revision(), revision);
        assert_eq!(cards[0].id, "2");
    }

    #[tokio::test]
    async fn test_malformed_range_fails_closed() {
        let catalog = loaded().await;
        let criteria = FilterCriteria::default().with_price_range("cheap");

        let cards = list_products(&catalog, criteria, "", &DisplayOptions::default()).unwrap();
        assert!(cards.is_empty());
    }

    #[tokio::test]
    async fn test_long_query_is_rejected() {
        let catalog = loaded().await;
        let err = list_products(
            &catalog,
            FilterCriteria::default(),
            &"x".repeat(101),
            &DisplayOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_open_and_close() {
        let catalog = loaded().await;
        let display = DisplayOptions::default();

        let detail = open_product(&catalog, "1", &display).unwrap();
        assert_eq!(detail.title, "PVC Pipe 20mm");
        assert_eq!(catalog.selected().unwrap().id, "1");

        let err = open_product(&catalog, "42", &display).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        close_product(&catalog);
        assert!(catalog.selected().is_none());
    }
}
