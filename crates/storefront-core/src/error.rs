//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-db errors        └── DbError       - key-value storage     │
//! │  storefront-catalog errors   └── CatalogError  - product fetch         │
//! │  apps/storefront errors      └── ApiError      - what the caller sees  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → CLI output             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with this id is in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A detail-view action ran while no product was selected.
    ///
    /// ## When This Occurs
    /// ```text
    /// Detail view closed (selection = None)
    ///      │
    ///      ▼
    /// "Add to Cart" / "Buy Now" on the detail footer
    ///      │
    ///      ▼
    /// NoProductSelected  (nothing is loaded, merged or persisted)
    /// ```
    #[error("No product is selected")]
    NoProductSelected,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. a price range without a numeric bound).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
