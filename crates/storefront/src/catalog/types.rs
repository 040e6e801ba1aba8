//! Domain types for the product catalog.
//!
//! These structures mirror what the upstream catalog source delivers and are
//! deliberately forgiving: optional fields default rather than fail, so a
//! partially populated product still renders. Data-integrity findings are
//! surfaced by [`validate`](crate::catalog::validate), never by
//! deserialization.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrina_core::{CollectionId, ProductId, VariantId};

// =============================================================================
// Option Types
// =============================================================================

/// Product option definition (one axis of variation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Declared values in display order (e.g., `["38", "39", "40"]`).
    pub values: Vec<String>,
    /// Value -> CSS color, for options rendered as color chips.
    #[serde(default)]
    pub swatches: BTreeMap<String, String>,
}

// =============================================================================
// Variant Types
// =============================================================================

/// A product variant (one concrete combination of option values).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Option name -> chosen value, one entry per product option.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// Variant price. Upstream rows without a price deserialize as zero.
    #[serde(default)]
    pub price: Decimal,
    /// Compare-at price (original price if on sale).
    pub compare_at_price: Option<Decimal>,
    /// Units on hand. Zero means sold out.
    #[serde(default)]
    pub stock: u32,
    /// Variant-specific image URL, overriding the product image.
    pub image: Option<String>,
}

impl ProductVariant {
    /// Whether this variant can currently be purchased.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Product Types
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// URL handle.
    pub slug: String,
    /// Product title.
    pub title: String,
    /// Description, possibly containing HTML markup.
    #[serde(default)]
    pub description: String,
    /// Base price, used when no variant is resolved.
    #[serde(default)]
    pub price: Decimal,
    /// Base compare-at price, inherited by variants without their own.
    pub compare_at_price: Option<Decimal>,
    /// Product-level stock for variant-less products. `None` means the
    /// product has no stock concept and counts as in stock.
    pub stock: Option<u32>,
    /// Image URLs in display order; the first is the default card image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Whether the product carries a featured badge.
    #[serde(default)]
    pub featured: bool,
    /// Option definitions in display order.
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Concrete variants.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Whether the product participates in variant resolution.
    ///
    /// A product with variants but no option definitions (or the reverse)
    /// is treated as variant-less and falls back to base price and stock.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty() && !self.options.is_empty()
    }

    /// The default card image, if any.
    #[must_use]
    pub fn featured_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Product-level stock check for variant-less products.
    ///
    /// A missing stock field means the product has no stock concept.
    #[must_use]
    pub fn base_in_stock(&self) -> bool {
        self.stock.is_none_or(|units| units > 0)
    }
}

// =============================================================================
// Collection Types
// =============================================================================

/// A curated set of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    /// Collection ID.
    pub id: CollectionId,
    /// Display name.
    pub name: String,
    /// Description shown on the collection card.
    #[serde(default)]
    pub description: String,
    /// Collection image URL.
    pub image: Option<String>,
    /// Whether the collection carries a featured badge.
    #[serde(default)]
    pub featured: bool,
    /// Member products in display order.
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
}

impl Collection {
    /// Whether the collection contains the given product.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The in-memory catalog aggregate handed to the engine by a loader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// All products in display order.
    #[serde(default)]
    pub products: Vec<Product>,
    /// All collections in display order.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl Catalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::CatalogParse`](crate::StorefrontError) if
    /// the JSON is malformed.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::CatalogFile`](crate::StorefrontError) if
    /// the file cannot be read, or
    /// [`StorefrontError::CatalogParse`](crate::StorefrontError) if its JSON
    /// is malformed.
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Look up a product by its URL handle.
    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a collection by ID.
    #[must_use]
    pub fn collection(&self, id: &CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| &c.id == id)
    }
}
