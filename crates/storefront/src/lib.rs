//! Vitrina Storefront engine library.
//!
//! Pure, synchronous derivation of product-card state from catalog data:
//! option normalization, variant resolution from partial selections, value
//! availability, pricing with compare-at fallback, and add-to-cart
//! eligibility. Rendering, routing, and persistence live elsewhere; this
//! crate turns already-loaded catalog structures into display-ready state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod browse;
pub mod card;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod view;

pub use browse::CollectionBrowse;
pub use card::{CardState, ProductCard, Selection};
pub use cart::{CartSink, MemoryCart};
pub use catalog::{Catalog, Collection, Product, ProductOption, ProductVariant};
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use view::CardPresenter;
