//! Catalog validation command.
//!
//! # Usage
//!
//! ```bash
//! vitrina check -c catalog.json
//! ```
//!
//! Issues are reported as warnings and the command fails when any are
//! found, so it slots into CI next to the catalog export step. The engine
//! itself tolerates every reported condition by degrading (duplicate
//! variant combinations stop resolving, orphan variants fall back to
//! product-level data); this command exists so the catalog gets fixed
//! instead of silently degrading in production.

use std::path::Path;

use vitrina_storefront::catalog::validate_catalog;

use super::CliError;

/// Validate a catalog file and report every issue found.
pub fn run(catalog_flag: Option<&Path>) -> Result<(), CliError> {
    let (_config, catalog) = super::load(catalog_flag)?;

    let issues = validate_catalog(&catalog);
    for issue in &issues {
        tracing::warn!("{issue}");
    }

    if issues.is_empty() {
        tracing::info!(
            "Catalog OK: {} product(s), {} collection(s)",
            catalog.products.len(),
            catalog.collections.len()
        );
        Ok(())
    } else {
        Err(CliError::IssuesFound(issues.len()))
    }
}
