//! The user's in-progress option choices for one product card.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A partial-to-complete mapping of option name to chosen value.
///
/// Owned by exactly one [`ProductCard`](crate::card::ProductCard); created
/// empty when the card is constructed and discarded with it. Entries are
/// overwrite-only: choosing a value replaces that option's previous choice
/// and re-choosing the same value changes nothing. There is no deselect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    choices: BTreeMap<String, String>,
}

impl Selection {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen value for an option, if any.
    #[must_use]
    pub fn get(&self, option: &str) -> Option<&str> {
        self.choices.get(option).map(String::as_str)
    }

    /// Whether `value` is the current choice for `option`.
    #[must_use]
    pub fn is_selected(&self, option: &str, value: &str) -> bool {
        self.get(option) == Some(value)
    }

    /// Number of options with a choice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Whether nothing has been chosen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// All (option, value) pairs, ordered by option name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices
            .iter()
            .map(|(option, value)| (option.as_str(), value.as_str()))
    }

    /// Overwrite the choice for one option. Callers are expected to have
    /// validated the pair against the product's declared options.
    pub(crate) fn set(&mut self, option: impl Into<String>, value: impl Into<String>) {
        self.choices.insert(option.into(), value.into());
    }

    /// A copy of this selection with `option` forced to `value`.
    ///
    /// This is the availability probe: the option's own current choice is
    /// overwritten, every other choice is kept.
    #[must_use]
    pub fn with_choice(&self, option: &str, value: &str) -> Self {
        let mut probe = self.clone();
        probe.choices.insert(option.to_owned(), value.to_owned());
        probe
    }

    /// A stable text form of the selection, e.g. `Color=Red;Size=38`.
    ///
    /// Entries are ordered by option name, so two selections with the same
    /// choices always produce the same fingerprint. Used as a cache key
    /// component and in logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut out = String::new();
        for (option, value) in &self.choices {
            if !out.is_empty() {
                out.push(';');
            }
            out.push_str(option);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_single_entry() {
        let mut selection = Selection::new();
        selection.set("Color", "Red");
        selection.set("Size", "38");
        selection.set("Color", "Blue");

        assert_eq!(selection.get("Color"), Some("Blue"));
        assert_eq!(selection.get("Size"), Some("38"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_reselect_same_value_is_idempotent() {
        let mut selection = Selection::new();
        selection.set("Size", "38");
        let before = selection.clone();
        selection.set("Size", "38");
        assert_eq!(selection, before);
    }

    #[test]
    fn test_with_choice_overwrites_probe_only() {
        let mut selection = Selection::new();
        selection.set("Color", "Red");
        selection.set("Size", "38");

        let probe = selection.with_choice("Color", "Blue");
        assert_eq!(probe.get("Color"), Some("Blue"));
        assert_eq!(probe.get("Size"), Some("38"));
        // The original selection is untouched.
        assert_eq!(selection.get("Color"), Some("Red"));
    }

    #[test]
    fn test_fingerprint_is_order_independent() {
        let mut a = Selection::new();
        a.set("Size", "38");
        a.set("Color", "Red");

        let mut b = Selection::new();
        b.set("Color", "Red");
        b.set("Size", "38");

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint(), "Color=Red;Size=38");
    }

    #[test]
    fn test_empty_fingerprint() {
        assert_eq!(Selection::new().fingerprint(), "");
    }
}
