//! # storefront-core: Pure Catalog Logic
//!
//! Filtering, search, truncation and cart-merge rules for the storefront,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/storefront (CLI + state)                   │   │
//! │  │    products ──► show ──► add (cart) ──► buy (checkout)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  filter   │  │   cart    │  │   view    │  │   │
//! │  │   │  Product  │  │  brand    │  │  merge    │  │  cards    │  │   │
//! │  │   │ CartEntry │  │  rating   │  │  totals   │  │  detail   │  │   │
//! │  │   │           │  │  price    │  │           │  │ truncate  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────┐   ┌───────────────▼───────────────┐   │
//! │  │  storefront-catalog (HTTP)  │   │  storefront-db (key-value)    │   │
//! │  └─────────────────────────────┘   └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartEntry)
//! - [`filter`] - Brand / rating / price-range predicates and the search stage
//! - [`cart`] - Cart merge and totals
//! - [`text`] - Display truncation
//! - [`view`] - Card and detail view models
//! - [`numeric`] - Lenient float parsing shared by filters and decoding
//! - [`validation`] - Input checks for ids and filter criteria
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::filter::{apply_filters, FilterCriteria};
//! use storefront_core::Product;
//!
//! let products = vec![Product::new("1", "PVC Pipe 20mm", "Supreme", 150.0, 4.5)];
//! let criteria = FilterCriteria::default().with_price_range("100-200");
//!
//! let visible = apply_filters(&products, &criteria);
//! assert_eq!(visible.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod filter;
pub mod numeric;
pub mod text;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use filter::FilterCriteria;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key under which the cart list is persisted.
pub const DEFAULT_CART_KEY: &str = "product";

/// Maximum characters of a name or description shown on a product card.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 55;

/// Names at least this long get their full text as a hover title.
pub const DEFAULT_TOOLTIP_THRESHOLD: usize = 50;

/// Currency symbol prefixed to prices.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";
