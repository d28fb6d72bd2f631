//! # Catalog Loader
//!
//! Holds the source-of-truth product list for the lifetime of the loader.
//!
//! ## When Fetching Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load() #1 ──► fetch_products() ──► Catalog cached                     │
//! │  load() #2 ──► cached Catalog (no request)                             │
//! │  load() #N ──► cached Catalog (no request)                             │
//! │                                                                         │
//! │  Concurrent first calls share one fetch.                               │
//! │  A failed fetch is cached too: the catalog stays empty, no retry.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use storefront_core::Product;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::source::ProductSource;

/// The fetched product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Products in API order.
    pub products: Vec<Product>,

    /// When the fetch succeeded. `None` if it failed.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// True if the fetch succeeded (even with zero products).
    pub fn is_loaded(&self) -> bool {
        self.fetched_at.is_some()
    }

    /// Looks up a product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// Fire-once, fail-soft wrapper around a [`ProductSource`].
#[derive(Debug)]
pub struct CatalogLoader<S> {
    source: S,
    catalog: OnceCell<Catalog>,
}

impl<S: ProductSource> CatalogLoader<S> {
    /// Creates a loader. Nothing is fetched until the first [`load`](Self::load).
    pub fn new(source: S) -> Self {
        CatalogLoader {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Returns the catalog, fetching it on the first call.
    pub async fn load(&self) -> &Catalog {
        self.catalog
            .get_or_init(|| async {
                match self.source.fetch_products().await {
                    Ok(products) => {
                        info!(count = products.len(), "Product catalog loaded");
                        Catalog {
                            products,
                            fetched_at: Some(Utc::now()),
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to load product catalog");
                        Catalog::default()
                    }
                }
            })
            .await
    }

    /// Returns the product list, fetching it on the first call.
    pub async fn products(&self) -> Vec<Product> {
        self.load().await.products.clone()
    }

    /// The catalog if a load has already completed.
    pub fn cached(&self) -> Option<&Catalog> {
        self.catalog.get()
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, CatalogResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubSource {
        products: Vec<Product>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProductSource for StubSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.clone())
        }
    }

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ProductSource for FailingSource {
        async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(CatalogError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        }
    }

    fn stub() -> StubSource {
        StubSource {
            products: vec![
                Product::new("1", "PVC Pipe 20mm", "Supreme", 150.0, 4.5),
                Product::new("2", "Ball Valve", "Astral", 250.0, 3.0),
            ],
            calls: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn test_fetches_once() {
        let loader = CatalogLoader::new(stub());
        assert!(loader.cached().is_none());

        assert_eq!(loader.products().await.len(), 2);
        assert_eq!(loader.products().await.len(), 2);

        let catalog = loader.load().await;
        assert!(catalog.is_loaded());
        assert_eq!(catalog.find("2").map(|p| p.company.as_str()), Some("Astral"));
        assert!(catalog.find("99").is_none());
        assert_eq!(loader.source().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_one_fetch() {
        let loader = Arc::new(CatalogLoader::new(stub()));

        let a = tokio::spawn({
            let loader = Arc::clone(&loader);
            async move { loader.products().await.len() }
        });
        let b = tokio::spawn({
            let loader = Arc::clone(&loader);
            async move { loader.products().await.len() }
        });

        assert_eq!(a.await.unwrap(), 2);
        assert_eq!(b.await.unwrap(), 2);
        assert_eq!(loader.source().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_leaves_catalog_empty_without_retry() {
        let loader = CatalogLoader::new(FailingSource {
            calls: AtomicUsize::new(0),
        });

        assert!(loader.products().await.is_empty());
        assert!(loader.products().await.is_empty());
        assert!(!loader.load().await.is_loaded());
        assert_eq!(loader.source().calls.load(Ordering::SeqCst), 1);
    }
}
