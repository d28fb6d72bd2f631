//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories in storefront-db                        │
//! │                                                                         │
//! │  CartState (apps/storefront)                                           │
//! │       │                                                                 │
//! │       │  repository.load() / repository.save(&entries)                 │
//! │       ▼                                                                 │
//! │  dyn CartRepository ─────────────┬──────────────────────┐              │
//! │                                  ▼                      ▼               │
//! │                     SqliteCartRepository     InMemoryCartRepository    │
//! │                                  │            (tests, throwaway runs)  │
//! │                                  ▼                                      │
//! │                     KeyValueRepository                                  │
//! │                     ├── get_item(key)                                   │
//! │                     ├── set_item(key, value)                            │
//! │                     └── remove_item(key)                                │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                     kv_store table                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`kv::KeyValueRepository`] - Raw string values by key
//! - [`cart::CartRepository`] - Load/save of the cart list

pub mod cart;
pub mod kv;
