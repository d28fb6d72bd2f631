//! # Cart State
//!
//! The cart accumulator. The list itself lives in a [`CartRepository`];
//! this state loads it fresh on every mutation.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartState::add(Some(product))                        │
//! │                                                                         │
//! │  1. repository.load()        ◄── fresh read, [] if absent / corrupt    │
//! │  2. merge_product()          ◄── same id: quantity + 1, else append    │
//! │  3. repository.save()        ◄── whole list replaced                   │
//! │  4. listener(&entries)       ◄── e.g. the cart badge                   │
//! │  5. return entries                                                      │
//! │                                                                         │
//! │  add(None) fails with NoProductSelected before step 1.                 │
//! │                                                                         │
//! │  NOTE: steps 1-3 run under an async mutex so two adds in this process  │
//! │        never interleave. Other processes are not coordinated with.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use storefront_core::cart::merge_product;
use storefront_core::{CartEntry, CoreError, Product};
use storefront_db::CartRepository;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::ApiError;

/// Called with the full list after every successful add.
pub type CartListener = Arc<dyn Fn(&[CartEntry]) + Send + Sync>;

/// Cart accumulator over an injected repository.
#[derive(Clone)]
pub struct CartState {
    repository: Arc<dyn CartRepository>,
    listener: Option<CartListener>,
    write_lock: Arc<Mutex<()>>,
}

impl CartState {
    /// Creates a cart state over `repository`, with no listener.
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        CartState {
            repository,
            listener: None,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Sets the listener notified after each add.
    pub fn with_listener(mut self, listener: impl Fn(&[CartEntry]) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Adds one unit of `product` and returns the updated list.
    pub async fn add(&self, product: Option<&Product>) -> Result<Vec<CartEntry>, ApiError> {
        let product = product.ok_or(CoreError::NoProductSelected)?;

        let entries = {
            let _guard = self.write_lock.lock().await;

            let mut entries = self.repository.load().await?;
            let quantity = merge_product(&mut entries, product);
            self.repository.save(&entries).await?;

            debug!(product_id = %product.id, quantity, items = entries.len(), "Product added to cart");
            entries
        };

        if let Some(listener) = &self.listener {
            listener(&entries);
        }

        Ok(entries)
    }

    /// The current list, read from storage.
    pub async fn entries(&self) -> Result<Vec<CartEntry>, ApiError> {
        Ok(self.repository.load().await?)
    }

    /// Empties the cart.
    pub async fn clear(&self) -> Result<(), ApiError> {
        let _guard = self.write_lock.lock().await;
        self.repository.clear().await?;
        debug!("Cart cleared");
        Ok(())
    }
}

impl std::fmt::Debug for CartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartState")
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Mutex as StdMutex;
    use storefront_db::InMemoryCartRepository;

    fn pipe() -> Product {
        Product::new("1", "PVC Pipe 20mm", "Supreme", 150.0, 4.5)
    }

    fn valve() -> Product {
        Product::new("2", "Ball Valve", "Astral", 250.0, 3.0)
    }

    #[tokio::test]
    async fn test_same_product_twice() {
        let cart = CartState::new(Arc::new(InMemoryCartRepository::new()));

        cart.add(Some(&pipe())).await.unwrap();
        let entries = cart.add(Some(&pipe())).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_two_products() {
        let cart = CartState::new(Arc::new(InMemoryCartRepository::new()));

        cart.add(Some(&pipe())).await.unwrap();
        cart.add(Some(&valve())).await.unwrap();

        let entries = cart.entries().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.quantity == 1));
    }

    #[tokio::test]
    async fn test_listener_sees_updated_list() {
        let seen = Arc::new(StdMutex::new(Vec::new()));
        let cart = CartState::new(Arc::new(InMemoryCartRepository::new())).with_listener({
            let seen = Arc::clone(&seen);
            move |entries: &[CartEntry]| seen.lock().unwrap().push(entries.len())
        });

        cart.add(Some(&pipe())).await.unwrap();
        cart.add(Some(&valve())).await.unwrap();
        cart.add(Some(&pipe())).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 2]);
    }

    #[tokio::test]
    async fn test_no_selection_is_rejected_without_touching_storage() {
        let repository = Arc::new(InMemoryCartRepository::new());
        let cart = CartState::new(repository.clone());

        let err = cart.add(None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(repository.raw().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_storage_starts_over() {
        let repository = Arc::new(InMemoryCartRepository::with_raw("definitely not json"));
        let cart = CartState::new(repository.clone());

        let entries = cart.add(Some(&pipe())).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 1);
        assert!(repository.raw().unwrap().starts_with('['));
    }

    #[tokio::test]
    async fn test_clear() {
        let cart = CartState::new(Arc::new(InMemoryCartRepository::new()));
        cart.add(Some(&pipe())).await.unwrap();

        cart.clear().await.unwrap();
        assert!(cart.entries().await.unwrap().is_empty());
    }
}
