//! In-memory cart collaborator.
//!
//! The card facade decides *whether* an add is allowed; the cart only
//! records it. Line snapshots freeze title, label, unit price, and image at
//! add time, so later catalog edits do not rewrite an open cart. Checkout
//! and persistence are out of scope.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitrina_core::{ProductId, VariantId};

use crate::catalog::types::{Product, ProductVariant};

// =============================================================================
// Merchandise
// =============================================================================

/// What an add-to-cart delegates: the resolved variant with its product, or
/// a variant-less product itself.
#[derive(Debug, Clone, Copy)]
pub enum Merchandise<'a> {
    /// A product sold without variants.
    Product(&'a Product),
    /// A resolved variant of a product.
    Variant {
        product: &'a Product,
        variant: &'a ProductVariant,
    },
}

impl<'a> Merchandise<'a> {
    /// The product being sold.
    #[must_use]
    pub const fn product(&self) -> &'a Product {
        match self {
            Self::Product(product) | Self::Variant { product, .. } => product,
        }
    }

    /// The resolved variant, if this is variant merchandise.
    #[must_use]
    pub const fn variant(&self) -> Option<&'a ProductVariant> {
        match self {
            Self::Product(_) => None,
            Self::Variant { variant, .. } => Some(variant),
        }
    }

    /// The variant ID, if any.
    #[must_use]
    pub fn variant_id(&self) -> Option<&'a VariantId> {
        self.variant().map(|variant| &variant.id)
    }

    /// The price one unit sells for right now.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.variant()
            .map_or(self.product().price, |variant| variant.price)
    }

    /// The product title shown on the line.
    #[must_use]
    pub fn title(&self) -> &'a str {
        &self.product().title
    }

    /// Option values joined in declared-option order, e.g. "Red / 38".
    ///
    /// `None` for product merchandise and for variants with no labelable
    /// values.
    #[must_use]
    pub fn variant_label(&self) -> Option<String> {
        let variant = self.variant()?;
        let values: Vec<&str> = self
            .product()
            .options
            .iter()
            .filter_map(|option| variant.options.get(&option.name))
            .map(String::as_str)
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(" / "))
        }
    }

    /// The image shown on the line: variant override or first product image.
    #[must_use]
    pub fn image(&self) -> Option<&'a str> {
        self.variant()
            .and_then(|variant| variant.image.as_deref())
            .or_else(|| self.product().featured_image())
    }
}

/// Receives permitted add-to-cart delegations from a product card.
pub trait CartSink {
    /// Record `quantity` units of the merchandise.
    fn add(&mut self, merchandise: Merchandise<'_>, quantity: u32);
}

// =============================================================================
// Cart Lines
// =============================================================================

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line ID, assigned at add time.
    pub id: Uuid,
    /// Product the line sells.
    pub product_id: ProductId,
    /// Variant the line sells, if the product has variants.
    pub variant_id: Option<VariantId>,
    /// Product title, frozen at add time.
    pub title: String,
    /// Variant option values, frozen at add time.
    pub variant_label: Option<String>,
    /// Unit price, frozen at add time.
    pub unit_price: Decimal,
    /// Units in the line.
    pub quantity: u32,
    /// Line image, frozen at add time.
    pub image: Option<String>,
    /// When the line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

// =============================================================================
// MemoryCart
// =============================================================================

/// A cart held entirely in memory.
///
/// Adding the same merchandise twice merges into one line keyed on
/// (product, variant). Everything else is plain list manipulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryCart {
    lines: Vec<CartLine>,
    created_at: DateTime<Utc>,
}

impl MemoryCart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines (the cart badge number).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// When the cart was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// Returns `false` when no line has the given ID.
    pub fn update_quantity(&mut self, line_id: Uuid, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_line(line_id);
        }
        match self.lines.iter_mut().find(|line| line.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` when no line has the given ID.
    pub fn remove_line(&mut self, line_id: Uuid) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != line_id);
        self.lines.len() < before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Default for MemoryCart {
    fn default() -> Self {
        Self::new()
    }
}

impl CartSink for MemoryCart {
    fn add(&mut self, merchandise: Merchandise<'_>, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let product_id = &merchandise.product().id;
        let variant_id = merchandise.variant_id();

        if let Some(line) = self.lines.iter_mut().find(|line| {
            &line.product_id == product_id && line.variant_id.as_ref() == variant_id
        }) {
            line.quantity += quantity;
            return;
        }

        self.lines.push(CartLine {
            id: Uuid::new_v4(),
            product_id: product_id.clone(),
            variant_id: variant_id.cloned(),
            title: merchandise.title().to_owned(),
            variant_label: merchandise.variant_label(),
            unit_price: merchandise.unit_price(),
            quantity,
            image: merchandise.image().map(str::to_owned),
            added_at: Utc::now(),
        });
    }
}
