//! # Commands Module
//!
//! The operations the CLI (or any other front-end) invokes. Each command
//! takes only the state it needs and returns `Result<T, ApiError>`.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Commands                                │
//! │                                                                         │
//! │  catalog.rs                cart.rs                  checkout.rs         │
//! │  ──────────                ───────                  ───────────         │
//! │  load_catalog              add_to_cart              buy_now             │
//! │  list_products             add_selected_to_cart     buy_selected        │
//! │  open_product              get_cart                                     │
//! │  close_product             clear_cart                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use cart::CartResponse;
pub use checkout::{CheckoutHandler, StdoutCheckoutHandler};
