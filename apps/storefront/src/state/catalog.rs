//! # Catalog State
//!
//! The product grid: raw list, criteria, the filtered list derived from
//! them, the search text, and which product the detail view shows.
//!
//! ## Recompute Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Transitions                            │
//! │                                                                         │
//! │  Change                  Filtered list            Visible list          │
//! │  ──────                  ─────────────            ────────────          │
//! │                                                                         │
//! │  set_products() ───────► apply_filters() ───────► search at read time  │
//! │                                                                         │
//! │  set_criteria() ───────► apply_filters() ───────► search at read time  │
//! │                                                                         │
//! │  set_search_query() ───► (unchanged) ───────────► search at read time  │
//! │                                                                         │
//! │  select(id) / clear_selection() only touch the selection.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::filter::{apply_filters, search_products};
use storefront_core::{CoreError, FilterCriteria, Product};
use tracing::debug;

/// Everything behind the catalog lock.
#[derive(Debug, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    criteria: FilterCriteria,
    filtered: Vec<Product>,
    search_query: String,
    selected: Option<Product>,
    revision: u64,
}

impl CatalogView {
    fn recompute(&mut self) {
        self.filtered = apply_filters(&self.products, &self.criteria);
        self.revision += 1;
        debug!(
            total = self.products.len(),
            filtered = self.filtered.len(),
            revision = self.revision,
            "Filtered products recomputed"
        );
    }
}

/// Thread-safe catalog state.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    inner: Arc<Mutex<CatalogView>>,
}

impl CatalogState {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_view<T>(&self, f: impl FnOnce(&mut CatalogView) -> T) -> T {
        let mut view = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut view)
    }

    /// Replaces the raw product list and recomputes the filtered list.
    pub fn set_products(&self, products: Vec<Product>) {
        self.with_view(|v| {
            v.products = products;
            v.recompute();
        });
    }

    /// Replaces the criteria and recomputes the filtered list.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.with_view(|v| {
            v.criteria = criteria;
            v.recompute();
        });
    }

    /// Sets the search text. The filtered list is left alone.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.with_view(|v| v.search_query = query.into());
    }

    /// The raw product list.
    pub fn products(&self) -> Vec<Product> {
        self.with_view(|v| v.products.clone())
    }

    /// The products passing the current criteria.
    pub fn filtered(&self) -> Vec<Product> {
        self.with_view(|v| v.filtered.clone())
    }

    /// The filtered products whose name matches the search text.
    pub fn visible(&self) -> Vec<Product> {
        self.with_view(|v| {
            search_products(&v.filtered, &v.search_query)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.with_view(|v| v.criteria.clone())
    }

    pub fn search_query(&self) -> String {
        self.with_view(|v| v.search_query.clone())
    }

    /// How many times the filtered list has been recomputed.
    pub fn revision(&self) -> u64 {
        self.with_view(|v| v.revision)
    }

    /// Looks up a product in the raw list.
    pub fn find(&self, id: &str) -> Option<Product> {
        self.with_view(|v| v.products.iter().find(|p| p.id == id).cloned())
    }

    /// Opens the detail view for `id`.
    pub fn select(&self, id: &str) -> Result<Product, CoreError> {
        self.with_view(|v| {
            let product = v
                .products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
            v.selected = Some(product.clone());
            Ok(product)
        })
    }

    /// The product shown in the detail view, if any.
    pub fn selected(&self) -> Option<Product> {
        self.with_view(|v| v.selected.clone())
    }

    /// Closes the detail view.
    pub fn clear_selection(&self) {
        self.with_view(|v| v.selected = None);
    }
}
