//! # View Models
//!
//! Serializable shapes of a product card in the grid and of the detail view,
//! so a frontend only has to lay them out.
//!
//! ```text
//! ┌──────────────────────────────┐     ┌────────────────────────────────┐
//! │ [image]                      │     │  PVC Conduit Pipe 20mm (full)  │
//! │ PVC Conduit Pipe 20mm ...    │◄─┐  │  [image]                       │
//! │ Supreme                      │  │  │  Brand : Supreme               │
//! │ Rigid conduit for ...        │  │  │  Description : ...             │
//! │ ₹150                         │  │  │  Price : ₹150                  │
//! │ ★★★★½                        │  │  │  Rating : ★★★★½                │
//! │ Available stock : 12         │  │  └────────────────────────────────┘
//! │ [Add to Cart] [Buy Now]      │  └── title/description cut at 55 chars
//! └──────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::text::truncate;
use crate::types::Product;
use crate::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_TOOLTIP_THRESHOLD, DEFAULT_TRUNCATE_LENGTH};

/// Presentation settings for cards and detail views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Characters kept from names and descriptions on a card.
    pub truncate_length: usize,
    /// Names at least this long carry their full text as a hover title.
    pub tooltip_threshold: usize,
    /// Prefix for prices.
    pub currency_symbol: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
            tooltip_threshold: DEFAULT_TOOLTIP_THRESHOLD,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl DisplayOptions {
    /// Formats a price as `"{symbol}{price}"`, e.g. `₹150` or `₹99.5`.
    pub fn price_label(&self, price: f64) -> String {
        format!("{}{}", self.currency_symbol, price)
    }
}

/// One tile of the product grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    /// Truncated name.
    pub title: Option<String>,
    /// Full name, only for long names.
    pub full_title: Option<String>,
    pub brand: String,
    /// Truncated description.
    pub description: Option<String>,
    pub price_label: String,
    pub star_rating: f64,
    pub stock_label: String,
    pub image: Option<String>,
}

impl ProductCard {
    /// Builds the card for `product`.
    pub fn from_product(product: &Product, options: &DisplayOptions) -> Self {
        let name = product.product_name.as_str();
        let full_title = (name.chars().count() >= options.tooltip_threshold)
            .then(|| name.to_string());

        ProductCard {
            id: product.id.clone(),
            title: truncate(Some(name), options.truncate_length),
            full_title,
            brand: product.company.clone(),
            description: truncate(product.description.as_deref(), options.truncate_length),
            price_label: options.price_label(product.price),
            star_rating: product.star_rating,
            stock_label: format!(
                "Available stock : {}",
                product.stock.map(|s| s.to_string()).unwrap_or_default()
            ),
            image: product.image.clone(),
        }
    }
}

/// The detail view of the selected product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub brand: String,
    pub description: Option<String>,
    pub price_label: String,
    pub star_rating: f64,
}

impl ProductDetail {
    /// Builds the detail view for `product`. Nothing is truncated here.
    pub fn from_product(product: &Product, options: &DisplayOptions) -> Self {
        ProductDetail {
            id: product.id.clone(),
            title: product.product_name.clone(),
            image: product.image.clone(),
            brand: product.company.clone(),
            description: product.description.clone(),
            price_label: options.price_label(product.price),
            star_rating: product.star_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_truncates_long_text() {
        let name = "Heavy Duty Rigid PVC Electrical Conduit Pipe, 20mm x 3m Length Grey";
        let product = Product::new("1", name, "Supreme", 150.0, 4.5)
            .with_description("Short")
            .with_stock(12.0);

        let card = ProductCard::from_product(&product, &DisplayOptions::default());
        let title = card.title.unwrap();
        assert_eq!(title.chars().count(), 55 + 3);
        assert!(title.ends_with("..."));
        assert_eq!(card.full_title.as_deref(), Some(name));
        assert_eq!(card.description.as_deref(), Some("Short"));
        assert_eq!(card.price_label, "₹150");
        assert_eq!(card.stock_label, "Available stock : 12");
    }

    #[test]
    fn test_short_name_has_no_tooltip() {
        let product = Product::new("1", "PVC Pipe 20mm", "Supreme", 99.5, 4.0);
        let card = ProductCard::from_product(&product, &DisplayOptions::default());

        assert_eq!(card.title.as_deref(), Some("PVC Pipe 20mm"));
        assert_eq!(card.full_title, None);
        assert_eq!(card.description, None);
        assert_eq!(card.price_label, "₹99.5");
        assert_eq!(card.stock_label, "Available stock : ");
    }

    #[test]
    fn test_detail_keeps_full_text() {
        let long = "x".repeat(80);
        let product = Product::new("1", long.clone(), "Supreme", 10.0, 3.0).with_description(long.clone());
        let options = DisplayOptions {
            currency_symbol: "$".to_string(),
            ..DisplayOptions::default()
        };

        let detail = ProductDetail::from_product(&product, &options);
        assert_eq!(detail.title, long);
        assert_eq!(detail.description.as_deref(), Some(long.as_str()));
        assert_eq!(detail.price_label, "$10");
    }
}
