//! Command line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront_core::FilterCriteria;

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the product catalog and manage the cart")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the products passing the filters
    Products {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: String,
        /// Add the product to the cart after showing it
        #[arg(long)]
        add_to_cart: bool,
        /// Hand the product to checkout after showing it
        #[arg(long)]
        buy_now: bool,
    },
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,
    },
    /// Show the cart
    Cart,
    /// Empty the cart
    ClearCart,
    /// Hand one product to checkout
    Buy {
        /// Product id
        id: String,
    },
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilterArgs {
    /// Price range as min-max, e.g. 100-200 (repeatable)
    #[arg(long = "price")]
    pub price_ranges: Vec<String>,

    /// Brand, matched exactly (repeatable)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Minimum star rating (repeatable, any one suffices)
    #[arg(long = "rating")]
    pub ratings: Vec<String>,

    /// Case-insensitive text to find in product names
    #[arg(short, long, default_value = "")]
    pub search: String,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            price_ranges: self.price_ranges.clone(),
            brands: self.brands.clone(),
            ratings: self.ratings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products_filters() {
        let cli = Cli::parse_from([
            "storefront", "products", "--price", "100-200", "--price", "0-50", "--brand", "Supreme",
            "--rating", "4", "--search", "pipe",
        ]);

        let Command::Products { filters } = cli.command else {
            panic!("expected products command");
        };
        let criteria = filters.criteria();
        assert_eq!(criteria.price_ranges, vec!["100-200", "0-50"]);
        assert_eq!(criteria.brands, vec!["Supreme"]);
        assert_eq!(criteria.ratings, vec!["4"]);
        assert_eq!(filters.search, "pipe");
    }

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::parse_from(["storefront", "--config", "/tmp/s.toml", "show", "7", "--add-to-cart"]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.toml")));
        assert!(matches!(
            cli.command,
            Command::Show { ref id, add_to_cart: true, buy_now: false } if id == "7"
        ));
    }

    #[test]
    fn test_parse_clear_cart() {
        let cli = Cli::parse_from(["storefront", "clear-cart"]);
        assert!(matches!(cli.command, Command::ClearCart));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
