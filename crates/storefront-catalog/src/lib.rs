//! # storefront-catalog: Catalog Loader
//!
//! One-time fetch of the full product list from the external catalog API.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Loading                                  │
//! │                                                                         │
//! │  CatalogLoader::load()                                                  │
//! │       │                                                                 │
//! │       ├── already loaded? ──────────────► cached Catalog               │
//! │       │                                                                 │
//! │       ▼  (first call only)                                              │
//! │  ProductSource::fetch_products()                                        │
//! │       │                                                                 │
//! │       │   HttpProductSource:                                            │
//! │       │   GET {api_base}/product/get-products                           │
//! │       │   ◄── { "products": [ {...}, {...} ] }                          │
//! │       │                                                                 │
//! │       ├── Ok(products) ─────────► Catalog { products, fetched_at }     │
//! │       └── Err(e) ──► error! ────► Catalog { [], None }  (no retry)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_catalog::{CatalogLoader, HttpProductSource};
//!
//! let loader = CatalogLoader::new(HttpProductSource::new("https://api.example.com"));
//! let products = loader.products().await;
//! ```

pub mod error;
pub mod loader;
pub mod source;

pub use error::{CatalogError, CatalogResult};
pub use loader::{Catalog, CatalogLoader};
pub use source::{HttpProductSource, ProductSource, ProductsResponse, PRODUCTS_PATH};
