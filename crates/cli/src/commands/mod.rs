//! CLI command implementations.

pub mod browse;
pub mod card;
pub mod check;

use std::path::{Path, PathBuf};

use thiserror::Error;
use vitrina_storefront::config::ConfigError;
use vitrina_storefront::{Catalog, StorefrontConfig, StorefrontError};

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded or a lookup failed.
    #[error("{0}")]
    Storefront(#[from] StorefrontError),

    /// Output could not be encoded as JSON.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `--select` argument was not of the form `OPTION=VALUE`.
    #[error("Invalid selection '{0}', expected OPTION=VALUE")]
    InvalidSelection(String),

    /// Catalog validation reported issues.
    #[error("Catalog has {0} issue(s)")]
    IssuesFound(usize),
}

/// Load the storefront config and the catalog named by the flag or by
/// `VITRINA_CATALOG`.
fn load(catalog_flag: Option<&Path>) -> Result<(StorefrontConfig, Catalog), CliError> {
    let config = StorefrontConfig::from_env()?;
    let path: PathBuf = match catalog_flag {
        Some(path) => path.to_path_buf(),
        None => config.require_catalog_path()?.to_path_buf(),
    };

    tracing::info!("Loading catalog from {}", path.display());
    let catalog = Catalog::load(&path)?;
    Ok((config, catalog))
}
