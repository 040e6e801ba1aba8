//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `VITRINA_CURRENCY` - ISO currency code for display prices (default: USD)
//! - `VITRINA_CATALOG` - Path to the catalog JSON file
//! - `VITRINA_CARD_CACHE_SIZE` - Maximum derived card states to memoize (default: 1000)

use std::path::{Path, PathBuf};

use thiserror::Error;
use vitrina_core::CurrencyCode;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront engine configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Currency used to format display prices
    pub currency: CurrencyCode,
    /// Path to the catalog JSON file
    pub catalog_path: Option<PathBuf>,
    /// Maximum number of derived card states to memoize
    pub card_cache_size: u64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let currency = parse_currency(&get_env_or_default("VITRINA_CURRENCY", "USD"))?;
        let catalog_path = get_optional_env("VITRINA_CATALOG").map(PathBuf::from);
        let card_cache_size = get_env_or_default("VITRINA_CARD_CACHE_SIZE", "1000")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("VITRINA_CARD_CACHE_SIZE".to_string(), e.to_string())
            })?;

        Ok(Self {
            currency,
            catalog_path,
            card_cache_size,
        })
    }

    /// The catalog path, required.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` when no path was configured.
    pub fn require_catalog_path(&self) -> Result<&Path, ConfigError> {
        self.catalog_path
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("VITRINA_CATALOG".to_string()))
    }
}

impl Default for StorefrontConfig {
    /// Defaults matching an empty environment.
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            catalog_path: None,
            card_cache_size: 1000,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a currency code from an environment value.
fn parse_currency(value: &str) -> Result<CurrencyCode, ConfigError> {
    value
        .parse()
        .map_err(|e: vitrina_core::ParseCurrencyError| {
            ConfigError::InvalidEnvVar("VITRINA_CURRENCY".to_string(), e.to_string())
        })
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
