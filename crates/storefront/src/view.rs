//! Render-ready view models.
//!
//! A [`ProductCardView`] is everything a card renderer needs, with all
//! pricing, stock, and availability decisions already made: formatted money
//! strings, badge texts, and per-value availability. Renderers apply styling
//! and nothing else.
//!
//! [`CardPresenter`] builds views through the derived-state cache, so a grid
//! that re-renders one popular product repeatedly derives its state once.

use serde::Serialize;
use vitrina_core::{CurrencyCode, Price};

use crate::card::{CardStateCache, ProductCard, ValueAvailability};
use crate::catalog::options::OptionKind;
use crate::catalog::types::Product;

/// One selectable value within an option row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceView {
    /// The value as declared on the product.
    pub value: String,
    /// CSS color for swatch rendering, on swatch axes only.
    pub swatch: Option<String>,
    /// Whether this value is the current selection for its option.
    pub selected: bool,
    /// Availability of this value under the card's current selection.
    pub availability: ValueAvailability,
}

impl ChoiceView {
    /// Whether a renderer following the standard card layout shows this
    /// choice at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability == ValueAvailability::Available
    }
}

/// One option axis with its annotated values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRowView {
    /// Axis name, e.g. "Color".
    pub name: String,
    /// How the axis renders.
    pub kind: OptionKind,
    /// Every declared value in declared order.
    pub choices: Vec<ChoiceView>,
}

impl OptionRowView {
    /// The choices the standard card layout renders.
    pub fn available_choices(&self) -> impl Iterator<Item = &ChoiceView> {
        self.choices.iter().filter(|choice| choice.is_available())
    }
}

/// Render-ready card data for one product under one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    /// URL handle.
    pub slug: String,
    /// Product title.
    pub title: String,
    /// Description with HTML tags stripped.
    pub description: String,
    /// Card image, if any.
    pub image: Option<String>,
    /// Formatted display price, e.g. "$19.99".
    pub price: String,
    /// Formatted strikethrough price, present only when it exceeds the
    /// display price.
    pub compare_at_price: Option<String>,
    /// Discount badge text, e.g. "-20%", absent when there is no discount.
    pub discount_badge: Option<String>,
    /// Whether the featured badge shows.
    pub featured: bool,
    /// Whether the card shows as purchasable.
    pub in_stock: bool,
    /// Whether the add button is enabled.
    pub can_add_to_cart: bool,
    /// Add button text.
    pub add_button_label: String,
    /// Option rows, present only for products with variants.
    pub option_rows: Vec<OptionRowView>,
}

/// Builds card views, memoizing the derived state underneath.
#[derive(Debug, Clone)]
pub struct CardPresenter {
    currency: CurrencyCode,
    cache: CardStateCache,
}

impl CardPresenter {
    /// Create a presenter with the default cache size.
    #[must_use]
    pub fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            cache: CardStateCache::default(),
        }
    }

    /// Create a presenter memoizing at most `cache_size` derived states.
    #[must_use]
    pub fn with_cache_size(currency: CurrencyCode, cache_size: u64) -> Self {
        Self {
            currency,
            cache: CardStateCache::new(cache_size),
        }
    }

    /// The currency views are formatted in.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// The underlying derived-state cache.
    #[must_use]
    pub const fn cache(&self) -> &CardStateCache {
        &self.cache
    }

    /// Build the view for a card's current selection.
    #[must_use]
    pub fn present(&self, card: &ProductCard<'_>) -> ProductCardView {
        let state = self.cache.get_or_derive(card);
        let product = card.product();

        let price = Price::new(state.current_price, self.currency).display();
        let compare_at_price = state
            .compare_at_price
            .filter(|compare| *compare > state.current_price)
            .map(|compare| Price::new(compare, self.currency).display());
        let discount_badge = state
            .discount_percentage
            .map(|percent| format!("-{percent}%"));
        let add_button_label = if state.in_stock { "Add to cart" } else { "Sold out" };

        let option_rows = if state.has_variants {
            option_rows(card)
        } else {
            Vec::new()
        };

        ProductCardView {
            slug: product.slug.clone(),
            title: product.title.clone(),
            description: strip_html(&product.description),
            image: state.display_image,
            price,
            compare_at_price,
            discount_badge,
            featured: product.featured,
            in_stock: state.in_stock,
            can_add_to_cart: state.can_add_to_cart,
            add_button_label: add_button_label.to_string(),
            option_rows,
        }
    }

    /// Build the view for a product with nothing selected.
    #[must_use]
    pub fn present_product(&self, product: &Product) -> ProductCardView {
        self.present(&ProductCard::new(product, self.currency))
    }
}

/// Annotate every axis value with selection and availability.
fn option_rows(card: &ProductCard<'_>) -> Vec<OptionRowView> {
    card.options()
        .axes()
        .iter()
        .map(|axis| OptionRowView {
            name: axis.name.clone(),
            kind: axis.kind,
            choices: axis
                .values
                .iter()
                .map(|value| ChoiceView {
                    value: value.clone(),
                    swatch: axis.swatch(value).map(str::to_owned),
                    selected: card.selection().is_selected(&axis.name, value),
                    availability: card.value_availability(&axis.name, value),
                })
                .collect(),
        })
        .collect()
}

/// Remove HTML tags from catalog copy.
///
/// A `<` opens a tag only if a later `>` closes it; a dangling `<` and
/// everything after it pass through untouched.
#[must_use]
pub fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }
        let mut tag = String::new();
        let mut closed = false;
        for t in chars.by_ref() {
            if t == '>' {
                closed = true;
                break;
            }
            tag.push(t);
        }
        if !closed {
            out.push('<');
            out.push_str(&tag);
        }
    }
    out
}
