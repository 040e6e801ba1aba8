//! Integration tests for Vitrina.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrina-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_card` - Selection, resolution, and availability flows
//! - `storefront_pricing` - Price, compare-at, and discount derivation
//! - `storefront_cart` - Add-to-cart gating and cart behavior
//! - `storefront_browse` - Collection filtering and card presentation
//!
//! The shared [`fixtures`] module builds the catalog the tests walk.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;
