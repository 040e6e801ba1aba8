//! Unified error handling for the storefront engine.
//!
//! The interactive surface degrades instead of failing: malformed selection
//! writes are ignored and inconsistent products fall back to product-level
//! data. Errors are reserved for the edges where data enters the engine,
//! so `StorefrontError` is what catalog loading and lookups return.

use thiserror::Error;

/// Engine-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog file could not be read.
    #[error("Catalog file error: {0}")]
    CatalogFile(#[from] std::io::Error),

    /// Catalog JSON did not deserialize.
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// No product with this slug.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// No collection with this id.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
