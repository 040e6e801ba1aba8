//! Variant resolution from a partial selection.
//!
//! A variant matches a selection when it agrees on every option the
//! selection constrains; options without a choice are unconstrained. The
//! selection resolves to a variant only when exactly one matches, so
//! resolution can happen before every option is chosen, and an ambiguous or
//! impossible selection resolves to nothing.

use crate::card::selection::Selection;
use crate::catalog::types::ProductVariant;

/// Whether a variant agrees with every constrained option of the selection.
#[must_use]
pub fn variant_matches(variant: &ProductVariant, selection: &Selection) -> bool {
    selection.entries().all(|(option, value)| {
        variant
            .options
            .get(option)
            .is_some_and(|chosen| chosen == value)
    })
}

/// All variants that agree with the selection, in catalog order.
pub fn matching_variants<'a>(
    variants: &'a [ProductVariant],
    selection: &'a Selection,
) -> impl Iterator<Item = &'a ProductVariant> {
    variants
        .iter()
        .filter(move |variant| variant_matches(variant, selection))
}

/// The single variant implied by the selection, if any.
///
/// Zero survivors means the combination does not exist; two or more means
/// the selection is still ambiguous. Both resolve to `None` and the caller
/// falls back to product-level price and stock.
#[must_use]
pub fn resolve<'a>(
    variants: &'a [ProductVariant],
    selection: &Selection,
) -> Option<&'a ProductVariant> {
    let mut survivors = variants
        .iter()
        .filter(|variant| variant_matches(variant, selection));
    match (survivors.next(), survivors.next()) {
        (Some(variant), None) => Some(variant),
        _ => None,
    }
}
