//! # Storefront Library
//!
//! Core library for the storefront command-line application.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (setup & dispatch)
//! ├── cli.rs          ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Products, criteria, search, selection
//! │   ├── cart.rs     ◄─── Cart accumulator
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Grid and detail commands
//! │   ├── cart.rs     ◄─── Cart commands
//! │   └── checkout.rs ◄─── Buy Now delegate
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Output Streams
//! Command results are JSON on stdout. Logs and errors go to stderr.

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use std::sync::Arc;
use storefront_catalog::{CatalogLoader, HttpProductSource};
use storefront_db::{Database, DbConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::StdoutCheckoutHandler;
use error::ApiError;
use state::{CartState, CatalogState, StorefrontConfig};

/// Runs one CLI invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation Lifecycle                              │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, to stderr                     │
/// │     • Default: info,storefront=debug,sqlx=warn; RUST_LOG overrides     │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → STOREFRONT_* variables               │
/// │                                                                         │
/// │  3. Catalog commands: fetch the product list once ────────────────────► │
/// │     • failure is logged, the grid stays empty                          │
/// │                                                                         │
/// │  4. Cart commands: open the SQLite store ─────────────────────────────► │
/// │     • WAL mode, pending migrations applied                             │
/// │                                                                         │
/// │  5. Dispatch, print JSON result ──────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), ApiError> {
    init_tracing();

    let config = StorefrontConfig::load(cli.config)?;
    let display = config.display();
    let catalog = CatalogState::new();

    info!(command = ?cli.command, "Starting storefront");

    match cli.command {
        Command::Products { filters } => {
            load_catalog(&config, &catalog).await?;
            let cards = commands::catalog::list_products(
                &catalog,
                filters.criteria(),
                &filters.search,
                &display,
            )?;
            print_json(&cards)
        }
        Command::Show {
            id,
            add_to_cart,
            buy_now,
        } => {
            load_catalog(&config, &catalog).await?;
            let detail = commands::catalog::open_product(&catalog, &id, &display)?;
            print_json(&detail)?;

            if add_to_cart {
                let (db, cart) = open_cart(&config).await?;
                let response = commands::cart::add_selected_to_cart(&catalog, &cart).await;
                db.close().await;
                print_json(&response?)?;
            }
            if buy_now {
                commands::checkout::buy_selected(&catalog, &StdoutCheckoutHandler).await?;
            }

            commands::catalog::close_product(&catalog);
            Ok(())
        }
        Command::Add { id } => {
            load_catalog(&config, &catalog).await?;
            let (db, cart) = open_cart(&config).await?;
            let response = commands::cart::add_to_cart(&catalog, &cart, &id).await;
            db.close().await;
            print_json(&response?)
        }
        Command::Cart => {
            let (db, cart) = open_cart(&config).await?;
            let response = commands::cart::get_cart(&cart).await;
            db.close().await;
            print_json(&response?)
        }
        Command::ClearCart => {
            let (db, cart) = open_cart(&config).await?;
            let response = commands::cart::clear_cart(&cart).await;
            db.close().await;
            print_json(&response?)
        }
        Command::Buy { id } => {
            load_catalog(&config, &catalog).await?;
            commands::checkout::buy_now(&catalog, &StdoutCheckoutHandler, &id).await?;
            Ok(())
        }
    }
}

/// Fetches the catalog from the configured API into `catalog`.
async fn load_catalog(config: &StorefrontConfig, catalog: &CatalogState) -> Result<(), ApiError> {
    let loader = CatalogLoader::new(HttpProductSource::new(config.api_base()?));
    commands::catalog::load_catalog(&loader, catalog).await;
    Ok(())
}

/// Opens the cart store and the accumulator over it.
async fn open_cart(config: &StorefrontConfig) -> Result<(Database, CartState), ApiError> {
    let path = config.database_path()?;
    let db = Database::new(DbConfig::new(path)).await?;

    let cart = CartState::new(Arc::new(db.carts(config.cart_key.clone()))).with_listener(|entries| {
        let quantity: u64 = entries.iter().map(|e| u64::from(e.quantity)).sum();
        info!(items = entries.len(), quantity, "Cart updated");
    });

    Ok((db, cart))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), ApiError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::internal(format!("Result could not be encoded: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: `info,storefront=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
