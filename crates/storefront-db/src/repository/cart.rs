//! # Cart Repository
//!
//! Load and save of the whole cart list. The merge itself lives in
//! `storefront_core::cart`; a repository only moves the list in and out of
//! storage.
//!
//! ## Load Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load()                                                                 │
//! │                                                                         │
//! │  stored value?                                                          │
//! │     ├── absent ───────────────────────────► []                          │
//! │     ├── not a JSON array ─────────────────► [] + warn!                  │
//! │     └── array ──► each item decoded alone                              │
//! │                     ├── unreadable item ──► skipped + warn!             │
//! │                     └── readable items ──► collapse duplicate ids       │
//! │                                                                         │
//! │  Storage failures (I/O, pool) are still errors.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use storefront_core::cart::collapse_duplicates;
use storefront_core::CartEntry;
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::repository::kv::KeyValueRepository;

/// Persisted cart list.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Reads the current list. Absent or unreadable data is an empty list.
    async fn load(&self) -> DbResult<Vec<CartEntry>>;

    /// Replaces the stored list.
    async fn save(&self, entries: &[CartEntry]) -> DbResult<()>;

    /// Removes the stored list.
    async fn clear(&self) -> DbResult<()>;
}

/// Decodes a stored cart, failing soft.
///
/// One unreadable entry is dropped on its own; the rest of the list survives
/// so the next save does not overwrite it.
fn decode_entries(key: &str, raw: Option<&str>) -> Vec<CartEntry> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Option<Vec<serde_json::Value>>>(raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            warn!(key = %key, error = %e, "Stored cart is unreadable, starting empty");
            return Vec::new();
        }
    };

    let entries = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<CartEntry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(key = %key, index, error = %e, "Skipping unreadable cart entry");
                None
            }
        })
        .collect();

    collapse_duplicates(entries)
}

// =============================================================================
// SQLite
// =============================================================================

/// Cart stored as a JSON array under one key of the key-value table.
#[derive(Debug, Clone)]
pub struct SqliteCartRepository {
    kv: KeyValueRepository,
    key: String,
}

impl SqliteCartRepository {
    /// Creates a repository storing its list under `key`.
    pub fn new(kv: KeyValueRepository, key: impl Into<String>) -> Self {
        SqliteCartRepository {
            kv,
            key: key.into(),
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl CartRepository for SqliteCartRepository {
    async fn load(&self) -> DbResult<Vec<CartEntry>> {
        let raw = self.kv.get_item(&self.key).await?;
        let entries = decode_entries(&self.key, raw.as_deref());
        debug!(key = %self.key, count = entries.len(), "Cart loaded");
        Ok(entries)
    }

    async fn save(&self, entries: &[CartEntry]) -> DbResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.kv.set_item(&self.key, &raw).await?;
        debug!(key = %self.key, count = entries.len(), "Cart saved");
        Ok(())
    }

    async fn clear(&self) -> DbResult<()> {
        self.kv.remove_item(&self.key).await?;
        Ok(())
    }
}

// =============================================================================
// In-Memory
// =============================================================================

/// Cart kept in process memory as the same JSON text the SQLite repository
/// would store.
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    raw: Mutex<Option<String>>,
}

impl InMemoryCartRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose stored value is `raw`, verbatim.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        InMemoryCartRepository {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// The stored text, if any.
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn load(&self) -> DbResult<Vec<CartEntry>> {
        Ok(decode_entries("memory", self.raw().as_deref()))
    }

    async fn save(&self, entries: &[CartEntry]) -> DbResult<()> {
        let raw = serde_json::to_string(entries)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> DbResult<()> {
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
