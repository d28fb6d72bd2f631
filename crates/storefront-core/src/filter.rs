//! # Filter Pipeline
//!
//! Turns the raw catalog into the list the grid shows.
//!
//! ## Two Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog → Grid                                     │
//! │                                                                         │
//! │  raw products ──┐                                                       │
//! │  price ranges ──┤                                                       │
//! │  brands ────────┼──► apply_filters() ──► filtered list (stored)        │
//! │  ratings ───────┘     brand AND rating AND price                        │
//! │                                │                                        │
//! │  search text ──────────────────┼──► search_products() ──► visible       │
//! │                                     (render time, never stored)        │
//! │                                                                         │
//! │  Stage 1 re-runs when the products or any criteria sequence change.    │
//! │  Search text changes only re-run stage 2.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every criteria sequence follows the same rule: empty means unconstrained,
//! otherwise the product must satisfy at least one entry.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::numeric::parse_float;
use crate::types::Product;

// =============================================================================
// Criteria
// =============================================================================

/// The three externally supplied criteria sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// `"min-max"` price ranges.
    #[serde(default, rename = "selectedPriceRange")]
    pub price_ranges: Vec<String>,

    /// Brand names matched exactly against `company`.
    #[serde(default, rename = "selectedBrands")]
    pub brands: Vec<String>,

    /// Minimum star ratings, as strings.
    #[serde(default, rename = "selectedRating")]
    pub ratings: Vec<String>,
}

impl FilterCriteria {
    /// Adds a `"min-max"` price range.
    pub fn with_price_range(mut self, range: impl Into<String>) -> Self {
        self.price_ranges.push(range.into());
        self
    }

    /// Adds a brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    /// Adds a rating threshold.
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.ratings.push(rating.into());
        self
    }

    /// True when no sequence constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.price_ranges.is_empty() && self.brands.is_empty() && self.ratings.is_empty()
    }

    /// Parses the numeric criteria once for repeated matching.
    pub fn compile(&self) -> CompiledCriteria<'_> {
        CompiledCriteria {
            brands: &self.brands,
            ratings: self.ratings.iter().map(|r| parse_float(r)).collect(),
            price_ranges: self.price_ranges.iter().map(|r| PriceRange::parse(r)).collect(),
        }
    }
}

// =============================================================================
// Price Range
// =============================================================================

/// An inclusive `min..=max` price range parsed from `"min-max"`.
///
/// The text is split on `-`; the first two pieces are the bounds. A bound
/// that does not parse is `NaN`, and a range with a `NaN` bound matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Parses `"min-max"`.
    pub fn parse(range: &str) -> Self {
        let mut parts = range.split('-');
        let min = parts.next().map(parse_float).unwrap_or(f64::NAN);
        let max = parts.next().map(parse_float).unwrap_or(f64::NAN);
        PriceRange { min, max }
    }

    /// Whether both bounds parsed.
    pub fn is_well_formed(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan()
    }

    /// `min <= price <= max`.
    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Criteria with every numeric string parsed up front.
#[derive(Debug, Clone)]
pub struct CompiledCriteria<'a> {
    brands: &'a [String],
    ratings: Vec<f64>,
    price_ranges: Vec<PriceRange>,
}

impl CompiledCriteria<'_> {
    /// Conjunction of the price, rating and brand predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_price(product) && self.matches_rating(product) && self.matches_brand(product)
    }

    fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.iter().any(|b| *b == product.company)
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.ratings.is_empty() || self.ratings.iter().any(|t| product.star_rating >= *t)
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.price_ranges.is_empty() || self.price_ranges.iter().any(|r| r.contains(product.price))
    }
}

// =============================================================================
// Individual Predicates
// =============================================================================

/// Passes when `brands` is empty or contains `product.company` exactly.
pub fn brand_filter(product: &Product, brands: &[String]) -> bool {
    brands.is_empty() || brands.iter().any(|b| *b == product.company)
}

/// Passes when `ratings` is empty or the product's rating reaches at least
/// one of the thresholds.
pub fn rating_filter(product: &Product, ratings: &[String]) -> bool {
    ratings.is_empty()
        || ratings
            .iter()
            .any(|r| product.star_rating >= parse_float(r))
}

/// Passes when `ranges` is empty or the price falls inside at least one
/// `"min-max"` range.
pub fn price_range_filter(product: &Product, ranges: &[String]) -> bool {
    ranges.is_empty() || ranges.iter().any(|r| PriceRange::parse(r).contains(product.price))
}

// =============================================================================
// Pipeline
// =============================================================================

/// Stage 1: the products satisfying every criteria sequence, in catalog order.
///
/// ## Example
/// ```rust
/// use storefront_core::filter::{apply_filters, FilterCriteria};
/// use storefront_core::Product;
///
/// let products = vec![
///     Product::new("1", "PVC Pipe 20mm", "Supreme", 150.0, 4.5),
///     Product::new("2", "PVC Pipe 40mm", "Supreme", 250.0, 4.0),
/// ];
/// let criteria = FilterCriteria::default().with_price_range("100-200");
///
/// let filtered = apply_filters(&products, &criteria);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].id, "1");
/// ```
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let compiled = criteria.compile();
    products
        .iter()
        .filter(|p| compiled.matches(p))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on the product name.
///
/// Products without a name never match, whatever the query.
pub fn matches_search(product: &Product, query: &str) -> bool {
    !product.product_name.is_empty()
        && product
            .product_name
            .to_lowercase()
            .contains(&query.to_lowercase())
}

/// Stage 2: the filtered products whose name matches `query`.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches_search(p, query)).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("1", "PVC Pipe 20mm", "Supreme", 150.0, 3.5),
            Product::new("2", "CPVC Elbow", "Ashirvad", 40.0, 4.5),
            Product::new("3", "Ball Valve", "Supreme", 250.0, 2.0),
            Product::new("4", "", "Finolex", 120.0, 5.0),
        ]
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_criteria_pass_everything() {
        for product in catalog() {
            assert!(brand_filter(&product, &[]));
            assert!(rating_filter(&product, &[]));
            assert!(price_range_filter(&product, &[]));
        }
        assert_eq!(apply_filters(&catalog(), &FilterCriteria::default()), catalog());
    }

    #[test]
    fn test_brand_filter_exact_match() {
        let product = Product::new("1", "Pipe", "Supreme", 10.0, 1.0);
        assert!(brand_filter(&product, &strings(&["Finolex", "Supreme"])));
        assert!(!brand_filter(&product, &strings(&["supreme"])));
        assert!(!brand_filter(&product, &strings(&["Supreme "])));
    }

    #[test]
    fn test_rating_filter_any_threshold() {
        let product = Product::new("1", "Pipe", "Supreme", 10.0, 3.5);
        assert!(rating_filter(&product, &strings(&["3", "4"])));
        assert!(!rating_filter(&product, &strings(&["4"])));
        assert!(!rating_filter(&product, &strings(&["high"])));
    }

    #[test]
    fn test_price_range_filter() {
        let ranges = strings(&["100-200"]);
        assert!(price_range_filter(&Product::new("1", "a", "b", 150.0, 0.0), &ranges));
        assert!(price_range_filter(&Product::new("1", "a", "b", 100.0, 0.0), &ranges));
        assert!(price_range_filter(&Product::new("1", "a", "b", 200.0, 0.0), &ranges));
        assert!(!price_range_filter(&Product::new("1", "a", "b", 250.0, 0.0), &ranges));
    }

    #[test]
    fn test_malformed_price_range_fails_closed() {
        let product = Product::new("1", "a", "b", 150.0, 0.0);
        assert!(!price_range_filter(&product, &strings(&["cheap"])));
        assert!(!price_range_filter(&product, &strings(&["100"])));
        assert!(!PriceRange::parse("100").is_well_formed());

        // one good range is enough
        assert!(price_range_filter(&product, &strings(&["oops", "0-500"])));
    }

    #[test]
    fn test_nan_price_never_matches() {
        let product = Product::new("1", "a", "b", f64::NAN, f64::NAN);
        assert!(!price_range_filter(&product, &strings(&["0-1000"])));
        assert!(!rating_filter(&product, &strings(&["0"])));
    }

    #[test]
    fn test_string_price_with_trailing_text_never_matches() {
        let product: Product =
            serde_json::from_str(r#"{ "id": "1", "product_name": "a", "price": "150abc" }"#).unwrap();
        assert!(!price_range_filter(&product, &strings(&["100-200"])));

        let product: Product =
            serde_json::from_str(r#"{ "id": "1", "product_name": "a", "price": "150" }"#).unwrap();
        assert!(price_range_filter(&product, &strings(&["100-200"])));
    }

    #[test]
    fn test_apply_filters_is_conjunction_and_keeps_order() {
        let criteria = FilterCriteria::default()
            .with_brand("Supreme")
            .with_brand("Finolex")
            .with_price_range("100-300")
            .with_rating("3");

        let ids: Vec<_> = apply_filters(&catalog(), &criteria)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let products = catalog();
        let found = search_products(&products, "pipe");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product_name, "PVC Pipe 20mm");

        assert_eq!(search_products(&products, "PVC").len(), 2);
    }

    #[test]
    fn test_search_skips_nameless_products() {
        let products = catalog();
        let ids: Vec<_> = search_products(&products, "").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_criteria_wire_names() {
        let json = r#"{ "selectedPriceRange": ["0-100"], "selectedBrands": ["Supreme"] }"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.price_ranges, vec!["0-100"]);
        assert_eq!(criteria.brands, vec!["Supreme"]);
        assert!(criteria.ratings.is_empty());
        assert!(!criteria.is_unconstrained());
    }
}
