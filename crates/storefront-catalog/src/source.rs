//! # Product Sources
//!
//! Where the product list comes from. The HTTP source talks to the catalog
//! API; tests plug in their own [`ProductSource`].

use async_trait::async_trait;
use serde::Deserialize;
use storefront_core::Product;
use tracing::{debug, warn};

use crate::error::{CatalogError, CatalogResult};

/// Path of the product list endpoint, relative to the API base.
pub const PRODUCTS_PATH: &str = "/product/get-products";

/// Anything that can produce the full product list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches every product. Called at most once per loader.
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>>;
}

/// Response envelope of the product list endpoint.
///
/// Items stay raw JSON here so each one is decoded on its own.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    /// The catalog, in API order.
    #[serde(default)]
    pub products: Vec<serde_json::Value>,
}

/// HTTP client for the catalog API.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    api_base: String,
}

impl HttpProductSource {
    /// Create a source for the API at `api_base`, e.g. `https://host/api`.
    ///
    /// A trailing `/` on the base is ignored.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_base)
    }

    /// Create a source reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self { client, api_base }
    }

    /// Full URL of the product list endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_base, PRODUCTS_PATH)
    }

    /// Decodes a product list response body.
    ///
    /// A body that is not a `{ products }` envelope is an error. Inside the
    /// envelope, a product that cannot be read (no `id`, an `id` that is
    /// neither string nor number, a non-object) is skipped with a warning.
    pub fn decode(body: &str) -> CatalogResult<Vec<Product>> {
        let response: ProductsResponse = serde_json::from_str(body)?;

        let products = response
            .products
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Product>(item) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(index, error = %e, "Skipping unreadable product");
                    None
                }
            })
            .collect();

        Ok(products)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> CatalogResult<Vec<Product>> {
        let url = self.endpoint();
        debug!(url = %url, "Fetching product catalog");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let products = Self::decode(&body)?;
        debug!(count = products.len(), "Product catalog decoded");
        Ok(products)
    }
}
