//! Normalized option axes for a single product.
//!
//! Raw [`ProductOption`] rows arrive as the upstream source stored them:
//! possibly with repeated names, repeated values, or swatch entries for
//! values that were later removed. [`OptionCatalog::build`] normalizes them
//! once per product load so every downstream consumer works from the same
//! cleaned view, and decides up front whether an axis renders as color chips
//! or text buttons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::types::{Product, ProductOption};

/// How an option axis is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionKind {
    /// Plain labeled choices.
    Text,
    /// Color chips backed by swatch colors.
    Swatch,
}

/// One normalized axis of variation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionAxis {
    /// Option name as declared.
    pub name: String,
    /// Declared values, first occurrence kept, order preserved.
    pub values: Vec<String>,
    /// Render kind, fixed at build time.
    pub kind: OptionKind,
    /// Value -> CSS color for swatch axes; empty for text axes.
    pub swatches: BTreeMap<String, String>,
}

impl OptionAxis {
    /// The swatch color for a value, if this axis renders as chips.
    #[must_use]
    pub fn swatch(&self, value: &str) -> Option<&str> {
        self.swatches.get(value).map(String::as_str)
    }

    /// Whether the value is one of this axis's declared values.
    #[must_use]
    pub fn declares(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// The normalized option axes of one product, built once per product load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionCatalog {
    axes: Vec<OptionAxis>,
}

/// Swatch metadata only applies to the color axis.
fn is_color_option(name: &str) -> bool {
    name.eq_ignore_ascii_case("color")
}

fn normalize_option(option: &ProductOption) -> OptionAxis {
    let mut values: Vec<String> = Vec::with_capacity(option.values.len());
    for value in &option.values {
        if !values.contains(value) {
            values.push(value.clone());
        }
    }

    // Swatches are honored only on the color axis, and only for values that
    // are actually declared.
    let swatches: BTreeMap<String, String> = if is_color_option(&option.name) {
        option
            .swatches
            .iter()
            .filter(|(value, _)| values.iter().any(|v| v == *value))
            .map(|(value, color)| (value.clone(), color.clone()))
            .collect()
    } else {
        BTreeMap::new()
    };

    let kind = if swatches.is_empty() {
        OptionKind::Text
    } else {
        OptionKind::Swatch
    };

    OptionAxis {
        name: option.name.clone(),
        values,
        kind,
        swatches,
    }
}

impl OptionCatalog {
    /// Build the normalized axes for a product.
    ///
    /// Declared order is preserved. A repeated option name keeps its first
    /// declaration; later duplicates are dropped.
    #[must_use]
    pub fn build(product: &Product) -> Self {
        let mut axes: Vec<OptionAxis> = Vec::with_capacity(product.options.len());
        for option in &product.options {
            if axes.iter().any(|axis| axis.name == option.name) {
                continue;
            }
            axes.push(normalize_option(option));
        }
        Self { axes }
    }

    /// All axes in declared order.
    #[must_use]
    pub fn axes(&self) -> &[OptionAxis] {
        &self.axes
    }

    /// Look up an axis by name.
    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&OptionAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Whether `value` is a declared value of the `option` axis.
    #[must_use]
    pub fn is_declared(&self, option: &str, value: &str) -> bool {
        self.axis(option).is_some_and(|axis| axis.declares(value))
    }

    /// Number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Whether the product declares no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}
