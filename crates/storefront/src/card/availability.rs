//! Per-value choosability under the current selection.
//!
//! Availability answers "if the user picked this value next, could that
//! still lead to a purchasable variant?". It is computed from the variant
//! list and the selection alone; the currently resolved variant plays no
//! part. The option being probed has its own current choice overwritten, so
//! the user can always move sideways within an axis.

use serde::{Deserialize, Serialize};

use crate::card::resolver::variant_matches;
use crate::card::selection::Selection;
use crate::catalog::types::ProductVariant;

/// The three-state answer for one candidate value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueAvailability {
    /// No variant has this combination; the value leads nowhere.
    Unavailable,
    /// The combination exists but every matching variant is out of stock.
    SoldOut,
    /// At least one matching variant has stock.
    Available,
}

/// Classify one candidate value for an option under the current selection.
#[must_use]
pub fn value_availability(
    variants: &[ProductVariant],
    selection: &Selection,
    option: &str,
    value: &str,
) -> ValueAvailability {
    let probe = selection.with_choice(option, value);

    let mut combination_exists = false;
    for variant in variants {
        if !variant_matches(variant, &probe) {
            continue;
        }
        if variant.in_stock() {
            return ValueAvailability::Available;
        }
        combination_exists = true;
    }

    if combination_exists {
        ValueAvailability::SoldOut
    } else {
        ValueAvailability::Unavailable
    }
}

/// Whether choosing the value can lead to an existing, in-stock variant.
#[must_use]
pub fn is_value_available(
    variants: &[ProductVariant],
    selection: &Selection,
    option: &str,
    value: &str,
) -> bool {
    matches!(
        value_availability(variants, selection, option, value),
        ValueAvailability::Available
    )
}
