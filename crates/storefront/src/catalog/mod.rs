//! Product catalog types and per-product normalization.
//!
//! # Architecture
//!
//! - [`types`] holds the serde structures an upstream loader fills in
//! - [`options`] normalizes a product's option axes once per load
//! - [`validate`] names data faults; the engine itself never rejects data
//!
//! The catalog is read-only input. Everything stateful (selections, carts,
//! collection filters) lives in the [`card`](crate::card),
//! [`cart`](crate::cart), and [`browse`](crate::browse) modules.

pub mod options;
pub mod types;
pub mod validate;

pub use options::{OptionAxis, OptionCatalog, OptionKind};
pub use types::{Catalog, Collection, Product, ProductOption, ProductVariant};
pub use validate::{CatalogIssue, validate_catalog, validate_product};
