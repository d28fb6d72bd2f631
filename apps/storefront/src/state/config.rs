//! # Storefront Configuration
//!
//! Read-only settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_API_BASE=https://shop.example.com/api                   │
//! │     STOREFRONT_DB_PATH=/tmp/storefront.db                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     cart key "product", "₹", 55 / 50 characters                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! api_base = "https://shop.example.com/api"
//! database_path = "/var/lib/storefront/storefront.db"
//! cart_key = "product"
//! currency_symbol = "₹"
//! truncate_length = 55
//! tooltip_threshold = 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use storefront_core::view::DisplayOptions;
use storefront_core::{
    DEFAULT_CART_KEY, DEFAULT_CURRENCY_SYMBOL, DEFAULT_TOOLTIP_THRESHOLD, DEFAULT_TRUNCATE_LENGTH,
};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const ENV_API_BASE: &str = "STOREFRONT_API_BASE";
pub const ENV_DB_PATH: &str = "STOREFRONT_DB_PATH";
pub const ENV_CART_KEY: &str = "STOREFRONT_CART_KEY";
pub const ENV_CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";
pub const ENV_TRUNCATE_LENGTH: &str = "STOREFRONT_TRUNCATE_LENGTH";
pub const ENV_TOOLTIP_THRESHOLD: &str = "STOREFRONT_TOOLTIP_THRESHOLD";

const DATABASE_FILE: &str = "storefront.db";
const CONFIG_FILE: &str = "storefront.toml";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine app data directory")]
    NoDataDir,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Base URL of the catalog API. Required by the catalog commands only.
    pub api_base: Option<String>,

    /// SQLite file holding the cart. Default: platform data directory.
    pub database_path: Option<PathBuf>,

    /// Key the cart list is stored under.
    pub cart_key: String,

    /// Prefix for price labels.
    pub currency_symbol: String,

    /// Characters kept from names and descriptions on a card.
    pub truncate_length: usize,

    /// Names at least this long get a full-text title on their card.
    pub tooltip_threshold: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            api_base: None,
            database_path: None,
            cart_key: DEFAULT_CART_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            truncate_length: DEFAULT_TRUNCATE_LENGTH,
            tooltip_threshold: DEFAULT_TOOLTIP_THRESHOLD,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration: defaults, then the config file, then the
    /// process environment.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |name| std::env::var(name).ok())
    }

    /// Same as [`load`](Self::load) with an explicit environment lookup.
    pub fn load_with(
        config_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cart_key.is_empty() {
            return Err(ConfigError::InvalidValue(ENV_CART_KEY.to_string()));
        }

        if let Some(ref base) = self.api_base {
            let url = Url::parse(base).map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", base, e)))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::InvalidUrl(format!(
                    "API base must start with http:// or https://, got: {}",
                    base
                )));
            }
        }

        Ok(())
    }

    /// Applies `STOREFRONT_*` overrides. Empty values are ignored.
    fn apply_env_overrides(
        &mut self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let var = |name: &str| env(name).filter(|value| !value.is_empty());

        if let Some(base) = var(ENV_API_BASE) {
            debug!(api_base = %base, "Overriding API base from environment");
            self.api_base = Some(base);
        }

        if let Some(path) = var(ENV_DB_PATH) {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = var(ENV_CART_KEY) {
            self.cart_key = key;
        }

        if let Some(symbol) = var(ENV_CURRENCY_SYMBOL) {
            self.currency_symbol = symbol;
        }

        if let Some(length) = var(ENV_TRUNCATE_LENGTH) {
            self.truncate_length = parse_var(ENV_TRUNCATE_LENGTH, &length)?;
        }

        if let Some(threshold) = var(ENV_TOOLTIP_THRESHOLD) {
            self.tooltip_threshold = parse_var(ENV_TOOLTIP_THRESHOLD, &threshold)?;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The catalog API base, or an error naming the missing variable.
    pub fn api_base(&self) -> Result<&str, ConfigError> {
        self.api_base
            .as_deref()
            .ok_or_else(|| ConfigError::MissingRequired(ENV_API_BASE.to_string()))
    }

    /// Resolves the database file path.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.storefront.storefront/storefront.db`
    /// - **Windows**: `%APPDATA%\storefront\storefront\data\storefront.db`
    /// - **Linux**: `~/.local/share/storefront/storefront.db`
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.database_path {
            return Ok(path.clone());
        }

        let dirs = directories::ProjectDirs::from("com", "storefront", "storefront")
            .ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE))
    }

    /// Presentation settings for cards and detail views.
    pub fn display(&self) -> DisplayOptions {
        DisplayOptions {
            truncate_length: self.truncate_length,
            tooltip_threshold: self.tooltip_threshold,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn missing_file() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let (_dir, path) = missing_file();
        let config = StorefrontConfig::load_with(Some(path), env_of(&[])).unwrap();

        assert_eq!(config.cart_key, "product");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.truncate_length, 55);
        assert_eq!(config.tooltip_threshold, 50);
        assert!(matches!(
            config.api_base(),
            Err(ConfigError::MissingRequired(name)) if name == "STOREFRONT_API_BASE"
        ));
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(
            &path,
            "api_base = \"https://file.example.com\"\ncart_key = \"basket\"\ntruncate_length = 40\n",
        )
        .unwrap();

        let config = StorefrontConfig::load_with(
            Some(path),
            env_of(&[
                (ENV_API_BASE, "https://env.example.com/api/"),
                (ENV_TOOLTIP_THRESHOLD, "30"),
                (ENV_DB_PATH, "/tmp/cart.db"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_base().unwrap(), "https://env.example.com/api/");
        assert_eq!(config.cart_key, "basket");
        assert_eq!(config.truncate_length, 40);
        assert_eq!(config.tooltip_threshold, 30);
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/tmp/cart.db"));

        let display = config.display();
        assert_eq!(display.truncate_length, 40);
        assert_eq!(display.price_label(10.0), "₹10");
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let (_dir, path) = missing_file();
        let err = StorefrontConfig::load_with(Some(path), env_of(&[(ENV_TRUNCATE_LENGTH, "long")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(name) if name == ENV_TRUNCATE_LENGTH));
    }

    #[test]
    fn test_invalid_api_base_is_rejected() {
        let (_dir, path) = missing_file();
        let err = StorefrontConfig::load_with(
            Some(path.clone()),
            env_of(&[(ENV_API_BASE, "ftp://shop.example.com")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));

        let err = StorefrontConfig::load_with(Some(path), env_of(&[(ENV_API_BASE, "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "truncate_length = \"many\"").unwrap();

        let err = StorefrontConfig::load_with(Some(path), env_of(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
