//! # Validation Module
//!
//! Input checks run before the pipeline. The filters themselves never reject
//! input (a malformed criterion just matches nothing); these helpers exist
//! so callers can report what will silently fail closed.
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_criteria, validate_product_id};
//! use storefront_core::FilterCriteria;
//!
//! assert!(validate_product_id("p-1").is_ok());
//!
//! let criteria = FilterCriteria::default().with_price_range("cheap");
//! assert_eq!(validate_criteria(&criteria).len(), 1);
//! ```

use crate::error::ValidationError;
use crate::filter::{FilterCriteria, PriceRange};
use crate::numeric::parse_float;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest search query accepted.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

/// Validates a product id.
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// Can be empty. The query is returned as given: the search stage matches
/// substrings, so surrounding spaces are significant.
pub fn validate_search_query(query: &str) -> ValidationResult<&str> {
    if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LENGTH,
        });
    }

    Ok(query)
}

/// Validates one `"min-max"` price range.
pub fn validate_price_range(range: &str) -> ValidationResult<PriceRange> {
    let parsed = PriceRange::parse(range);
    if !parsed.is_well_formed() {
        return Err(ValidationError::InvalidFormat {
            field: "price range".to_string(),
            reason: format!("'{}' is not of the form min-max", range),
        });
    }

    Ok(parsed)
}

/// Validates one rating threshold.
pub fn validate_rating_threshold(rating: &str) -> ValidationResult<f64> {
    let threshold = parse_float(rating);
    if threshold.is_nan() {
        return Err(ValidationError::InvalidFormat {
            field: "rating".to_string(),
            reason: format!("'{}' is not a number", rating),
        });
    }

    Ok(threshold)
}

/// Lists every numeric criterion that can never match.
pub fn validate_criteria(criteria: &FilterCriteria) -> Vec<ValidationError> {
    let ranges = criteria
        .price_ranges
        .iter()
        .filter_map(|r| validate_price_range(r).err());
    let ratings = criteria
        .ratings
        .iter()
        .filter_map(|r| validate_rating_threshold(r).err());

    ranges.chain(ratings).collect()
}
