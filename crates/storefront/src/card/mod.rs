//! The product card facade.
//!
//! # Architecture
//!
//! One [`ProductCard`] per rendered product. The card owns the product's
//! normalized [`OptionCatalog`] (built once at construction) and the user's
//! [`Selection`] (the only mutable state). Everything else is derived on
//! demand by the pure functions in [`resolver`], [`availability`],
//! [`pricing`], and [`eligibility`]; a [`select`](ProductCard::select) call
//! followed by re-reading any derived value is atomic from the caller's
//! perspective because nothing is cached inside the card.
//!
//! Cards are independent: two cards over the same product share nothing, so
//! a grid of cards never cross-talks.
//!
//! # Example
//!
//! ```
//! use vitrina_core::CurrencyCode;
//! use vitrina_storefront::card::ProductCard;
//! use vitrina_storefront::catalog::Product;
//!
//! let product: Product = serde_json::from_str(
//!     r#"{
//!         "id": "shoe", "slug": "runner", "title": "Runner", "price": "90",
//!         "options": [
//!             { "name": "Color", "values": ["Red", "Blue"] },
//!             { "name": "Size", "values": ["38", "39"] }
//!         ],
//!         "variants": [
//!             { "id": "r38", "options": { "Color": "Red", "Size": "38" }, "price": "100", "stock": 2 },
//!             { "id": "r39", "options": { "Color": "Red", "Size": "39" }, "price": "100", "stock": 1 },
//!             { "id": "b38", "options": { "Color": "Blue", "Size": "38" }, "price": "110", "stock": 4 }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut card = ProductCard::new(&product, CurrencyCode::USD);
//! assert!(card.matching_variant().is_none());
//!
//! // Blue exists in one size only, so it resolves immediately.
//! card.select("Color", "Blue");
//! assert_eq!(card.matching_variant().unwrap().id.as_str(), "b38");
//! assert_eq!(card.format_money(card.current_price()), "$110.00");
//! ```

pub mod availability;
pub mod cache;
pub mod eligibility;
pub mod pricing;
pub mod resolver;
pub mod selection;

pub use availability::ValueAvailability;
pub use cache::CardStateCache;
pub use eligibility::StockLabel;
pub use selection::Selection;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vitrina_core::{CurrencyCode, Price, VariantId};

use crate::cart::{CartSink, Merchandise};
use crate::catalog::options::OptionCatalog;
use crate::catalog::types::{Product, ProductVariant};

/// Interactive state and derived views for one rendered product.
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    product: &'a Product,
    options: OptionCatalog,
    selection: Selection,
    currency: CurrencyCode,
}

impl<'a> ProductCard<'a> {
    /// Create a card with an empty selection.
    #[must_use]
    pub fn new(product: &'a Product, currency: CurrencyCode) -> Self {
        Self {
            product,
            options: OptionCatalog::build(product),
            selection: Selection::new(),
            currency,
        }
    }

    /// The underlying product.
    #[must_use]
    pub const fn product(&self) -> &'a Product {
        self.product
    }

    /// The normalized option axes.
    #[must_use]
    pub const fn options(&self) -> &OptionCatalog {
        &self.options
    }

    /// Read-only view of the current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The currency used for formatting.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Choose a value for an option.
    ///
    /// The sole mutation entry point. Overwrites that option's previous
    /// choice; re-choosing the same value changes nothing. A pair the
    /// product does not declare is ignored without touching any state.
    pub fn select(&mut self, option: &str, value: &str) {
        if !self.options.is_declared(option, value) {
            tracing::debug!(
                product = %self.product.id,
                option,
                value,
                "ignoring selection of undeclared option value"
            );
            return;
        }
        self.selection.set(option, value);
    }

    // =========================================================================
    // Resolution & Availability
    // =========================================================================

    /// The single variant implied by the current selection, if any.
    ///
    /// Products that do not participate in variant resolution (no variants,
    /// or a variants/options mismatch) never resolve one.
    #[must_use]
    pub fn matching_variant(&self) -> Option<&'a ProductVariant> {
        if !self.product.has_variants() {
            return None;
        }
        resolver::resolve(&self.product.variants, &self.selection)
    }

    /// Three-state availability of `value` on `option` under the current
    /// selection.
    #[must_use]
    pub fn value_availability(&self, option: &str, value: &str) -> ValueAvailability {
        availability::value_availability(&self.product.variants, &self.selection, option, value)
    }

    /// Whether choosing the value can lead to an existing, in-stock variant.
    #[must_use]
    pub fn is_value_available(&self, option: &str, value: &str) -> bool {
        availability::is_value_available(&self.product.variants, &self.selection, option, value)
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// The price to display right now.
    #[must_use]
    pub fn current_price(&self) -> Decimal {
        pricing::current_price(self.product, self.matching_variant())
    }

    /// The strikethrough price, if any.
    #[must_use]
    pub fn compare_at_price(&self) -> Option<Decimal> {
        pricing::compare_at_price(self.product, self.matching_variant())
    }

    /// Whole-percent discount, absent when there is none.
    #[must_use]
    pub fn discount_percentage(&self) -> Option<u32> {
        pricing::discount_percentage(self.current_price(), self.compare_at_price())
    }

    /// The current price with the card's currency attached.
    #[must_use]
    pub fn price(&self) -> Price {
        Price::new(self.current_price(), self.currency)
    }

    /// Format an amount in the card's currency, e.g. "$19.99".
    #[must_use]
    pub fn format_money(&self, amount: Decimal) -> String {
        Price::new(amount, self.currency).display()
    }

    // =========================================================================
    // Eligibility
    // =========================================================================

    /// Whether the product participates in variant resolution.
    #[must_use]
    pub fn has_variants(&self) -> bool {
        self.product.has_variants()
    }

    /// Whether the card currently shows as purchasable.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        eligibility::in_stock(self.product, self.matching_variant())
    }

    /// Whether the add button is enabled.
    #[must_use]
    pub fn can_add_to_cart(&self) -> bool {
        eligibility::can_add_to_cart(self.product, self.matching_variant())
    }

    /// Stock badge for the card.
    #[must_use]
    pub fn stock_label(&self) -> StockLabel {
        StockLabel::from_in_stock(self.in_stock())
    }

    // =========================================================================
    // Display & Delegation
    // =========================================================================

    /// The card image: resolved variant's override or first product image.
    #[must_use]
    pub fn display_image(&self) -> Option<&'a str> {
        self.matching_variant()
            .and_then(|variant| variant.image.as_deref())
            .or_else(|| self.product.featured_image())
    }

    /// Delegate one unit to the cart when the add button is enabled.
    ///
    /// The merchandise is the resolved variant, or the product itself for
    /// variant-less products. Returns whether the delegation happened.
    pub fn add_to_cart(&self, cart: &mut impl CartSink) -> bool {
        if !self.can_add_to_cart() {
            return false;
        }
        let merchandise = self.matching_variant().map_or(
            Merchandise::Product(self.product),
            |variant| Merchandise::Variant {
                product: self.product,
                variant,
            },
        );
        cart.add(merchandise, 1);
        true
    }

    /// An owned snapshot of every headline derived value.
    #[must_use]
    pub fn derive(&self) -> CardState {
        let current_price = self.current_price();
        let compare_at_price = self.compare_at_price();
        let in_stock = self.in_stock();
        CardState {
            matching_variant: self.matching_variant().map(|variant| variant.id.clone()),
            current_price,
            compare_at_price,
            discount_percentage: pricing::discount_percentage(current_price, compare_at_price),
            has_variants: self.has_variants(),
            in_stock,
            can_add_to_cart: self.can_add_to_cart(),
            stock_label: StockLabel::from_in_stock(in_stock),
            display_image: self.display_image().map(str::to_owned),
        }
    }
}

/// Owned snapshot of a card's derived values.
///
/// Cheap to clone and compare; what the derived-state cache stores and what
/// presenters consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    /// Resolved variant, if any.
    pub matching_variant: Option<VariantId>,
    /// Price to display.
    pub current_price: Decimal,
    /// Strikethrough price, if any.
    pub compare_at_price: Option<Decimal>,
    /// Whole-percent discount, absent when none.
    pub discount_percentage: Option<u32>,
    /// Whether the product participates in variant resolution.
    pub has_variants: bool,
    /// Whether the card shows as purchasable.
    pub in_stock: bool,
    /// Whether the add button is enabled.
    pub can_add_to_cart: bool,
    /// Stock badge.
    pub stock_label: StockLabel,
    /// Card image, if any.
    pub display_image: Option<String>,
}
