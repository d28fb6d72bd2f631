//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────────────┐      │
//! │  │      Product        │          │         CartEntry           │      │
//! │  │  ─────────────────  │          │  ─────────────────────────  │      │
//! │  │  id                 │ flatten  │  ...every Product field     │      │
//! │  │  product_name       │ ───────► │  quantity (>= 1)            │      │
//! │  │  description        │          │                             │      │
//! │  │  company            │          │  unique by id in the cart   │      │
//! │  │  price, star_rating │          └─────────────────────────────┘      │
//! │  │  stock, image       │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Decoding
//! Products come from an external API and are read forgivingly:
//! - a missing or null `product_name` / `company` becomes `""`
//! - `id` may be a JSON string or number (normalized to a string), so `1`
//!   and `"1"` name the same product
//! - `price` / `star_rating` may be numbers or numeric strings; a string must
//!   be a whole literal (`"150abc"` is `NaN`), missing or null becomes `NaN`,
//!   which fails every filter comparison
//! - a cart entry's null or missing `quantity` reads as 0

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::numeric::parse_number;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, the cart's uniqueness key.
    #[serde(deserialize_with = "deserialize_id")]
    #[ts(type = "string")]
    pub id: String,

    /// Display name. Empty when the payload had none.
    #[serde(default, deserialize_with = "deserialize_text")]
    #[ts(type = "string")]
    pub product_name: String,

    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,

    /// Brand / manufacturer, matched exactly by the brand filter.
    #[serde(default, deserialize_with = "deserialize_text")]
    #[ts(type = "string")]
    pub company: String,

    /// Unit price.
    #[serde(default = "not_a_number", deserialize_with = "deserialize_number")]
    #[ts(type = "number")]
    pub price: f64,

    /// Star rating, 0 to 5 in half steps.
    #[serde(default = "not_a_number", deserialize_with = "deserialize_number")]
    #[ts(type = "number")]
    pub star_rating: f64,

    /// Units in stock (display only).
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    #[ts(type = "number | null")]
    pub stock: Option<f64>,

    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Creates a product with the fields the filters look at.
    ///
    /// Description, stock and image are left empty.
    pub fn new(
        id: impl Into<String>,
        product_name: impl Into<String>,
        company: impl Into<String>,
        price: f64,
        star_rating: f64,
    ) -> Self {
        Product {
            id: id.into(),
            product_name: product_name.into(),
            description: None,
            company: company.into(),
            price,
            star_rating,
            stock: None,
            image: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the stock level.
    pub fn with_stock(mut self, stock: f64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Sets the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A product in the cart together with how many times it was added.
///
/// ## Wire Format
/// Serialized flat, product fields and `quantity` side by side:
/// ```json
/// { "id": "7", "product_name": "PVC Pipe 20mm", "price": 150, ..., "quantity": 2 }
/// ```
/// A stored entry with a missing or null `quantity` reads back as quantity 0,
/// so the next add brings it to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    /// Snapshot of the product at the time it was first added.
    #[serde(flatten)]
    pub product: Product,

    /// Number of units.
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
}

impl CartEntry {
    /// Creates an entry for a product added for the first time.
    pub fn new(product: &Product) -> Self {
        CartEntry {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// The entry's product id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Price times quantity.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

// =============================================================================
// Lenient Deserializers
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn not_a_number() -> f64 {
    f64::NAN
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_number(deserializer)?.unwrap_or(f64::NAN))
}

fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(s)) => Some(parse_number(&s)),
        None => None,
    })
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_api_payload() {
        let json = r#"{
            "id": "p-1",
            "product_name": "PVC Pipe 20mm",
            "description": "Rigid conduit pipe",
            "company": "Supreme",
            "price": 150,
            "star_rating": 4.5,
            "stock": 12,
            "image": "https://cdn.example.com/pipe.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p-1");
        assert_eq!(product.company, "Supreme");
        assert_eq!(product.price, 150.0);
        assert_eq!(product.star_rating, 4.5);
        assert_eq!(product.stock, Some(12.0));
    }

    #[test]
    fn test_product_decodes_loosely_typed_fields() {
        let json = r#"{ "id": 17, "product_name": null, "price": "99.5", "star_rating": "4" }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "17");
        assert_eq!(product.product_name, "");
        assert_eq!(product.company, "");
        assert_eq!(product.price, 99.5);
        assert_eq!(product.star_rating, 4.0);
        assert_eq!(product.stock, None);
    }

    #[test]
    fn test_numeric_string_must_be_whole() {
        let json = r#"{ "id": "x", "price": "150abc", "star_rating": " 4.5 ", "stock": "" }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.price.is_nan());
        assert_eq!(product.star_rating, 4.5);
        assert_eq!(product.stock, Some(0.0));
    }

    #[test]
    fn test_numeric_and_text_ids_normalize_alike() {
        let numeric: Product = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();
        let text: Product = serde_json::from_str(r#"{ "id": "1" }"#).unwrap();
        assert_eq!(numeric.id, text.id);
    }

    #[test]
    fn test_missing_numbers_are_nan() {
        let product: Product = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();
        assert!(product.price.is_nan());
        assert!(product.star_rating.is_nan());
    }

    #[test]
    fn test_cart_entry_is_flat_on_the_wire() {
        let entry = CartEntry {
            product: Product::new("7", "Elbow", "Finolex", 20.0, 3.0),
            quantity: 2,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], "7");
        assert_eq!(value["product_name"], "Elbow");
        assert_eq!(value["quantity"], 2);
    }

    #[test]
    fn test_cart_entry_without_quantity_reads_as_zero() {
        let json = r#"{ "id": "7", "product_name": "Elbow", "price": 20, "star_rating": 3 }"#;

        let entry: CartEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id(), "7");
        assert_eq!(entry.quantity, 0);
    }

    #[test]
    fn test_cart_entry_with_null_quantity_reads_as_zero() {
        let json = r#"{ "id": "2", "product_name": "Tee", "price": 12, "quantity": null }"#;

        let entry: CartEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id(), "2");
        assert_eq!(entry.quantity, 0);
    }

    #[test]
    fn test_line_total() {
        let mut entry = CartEntry::new(&Product::new("1", "Tee", "Ashirvad", 12.5, 4.0));
        entry.quantity = 4;
        assert_eq!(entry.line_total(), 50.0);
    }
}
