//! # State Module
//!
//! Application state for the storefront, one focused type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  CatalogState    │  │    CartState     │  │  StorefrontConfig    │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Arc<Mutex<      │  │  Arc<dyn Cart    │  │  api_base            │  │
//! │  │    CatalogView   │  │    Repository>   │  │  cart_key            │  │
//! │  │  >>              │  │  + listener      │  │  display options     │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: std Mutex, held only for in-memory work               │
//! │  • CartState: async Mutex around load → merge → save                   │
//! │  • StorefrontConfig: read-only after startup                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{CartListener, CartState};
pub use catalog::{CatalogState, CatalogView};
pub use config::{ConfigError, StorefrontConfig};
