//! # Catalog Errors
//!
//! Failures of a single catalog fetch. The loader never surfaces these to
//! callers of [`crate::CatalogLoader::products`]; they are logged and the
//! catalog stays empty.

use thiserror::Error;

/// Errors from fetching the product list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog API returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not a `{ "products": [...] }` document.
    #[error("Catalog response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
