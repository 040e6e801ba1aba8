//! Add-to-cart enablement and the stock label.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::types::{Product, ProductVariant};

/// Stock badge shown on the card and the add button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockLabel {
    InStock,
    SoldOut,
}

impl StockLabel {
    #[must_use]
    pub const fn from_in_stock(in_stock: bool) -> Self {
        if in_stock { Self::InStock } else { Self::SoldOut }
    }
}

impl fmt::Display for StockLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InStock => write!(f, "in stock"),
            Self::SoldOut => write!(f, "sold out"),
        }
    }
}

/// Whether the card currently shows as purchasable.
///
/// With a resolved variant, its stock decides. Without one, a product that
/// participates in variant resolution is not purchasable yet; a variant-less
/// product falls back to its own stock field, defaulting to in stock when
/// it has none.
#[must_use]
pub fn in_stock(product: &Product, variant: Option<&ProductVariant>) -> bool {
    variant.map_or_else(
        || !product.has_variants() && product.base_in_stock(),
        ProductVariant::in_stock,
    )
}

/// Whether the add button is enabled.
///
/// Variant products need a resolved variant; everything needs stock.
#[must_use]
pub fn can_add_to_cart(product: &Product, variant: Option<&ProductVariant>) -> bool {
    (!product.has_variants() || variant.is_some()) && in_stock(product, variant)
}
