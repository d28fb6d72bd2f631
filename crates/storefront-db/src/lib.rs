//! # storefront-db: Local Storage for the Storefront
//!
//! The storefront keeps exactly one piece of state between runs: the cart.
//! It lives as a JSON string in a tiny key-value table on SQLite, the same
//! way a browser app would keep it in local storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Data Flow                               │
//! │                                                                         │
//! │  add_to_cart command                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   storefront-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │    Repositories    │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │                    │  │ (embedded) │  │   │
//! │  │   │               │◄───│ KeyValueRepository │  │            │  │   │
//! │  │   │  SqlitePool   │    │ SqliteCartRepo     │  │ 001_kv.sql │  │   │
//! │  │   └───────────────┘    │ InMemoryCartRepo   │  └────────────┘  │   │
//! │  │                        └────────────────────┘                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  kv_store: key = "product", value = "[{...,\"quantity\":2}]"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_db::{CartRepository, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("storefront.db")).await?;
//! let carts = db.carts("product");
//!
//! let mut entries = carts.load().await?;
//! storefront_core::cart::merge_product(&mut entries, &product);
//! carts.save(&entries).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::cart::{CartRepository, InMemoryCartRepository, SqliteCartRepository};
pub use repository::kv::KeyValueRepository;
