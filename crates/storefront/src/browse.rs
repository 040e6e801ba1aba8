//! Collection browsing state.
//!
//! One [`CollectionBrowse`] per catalog view. Like the product card it owns
//! only UI state (which collection is active) and derives everything else on
//! demand; the collection list itself is borrowed from the catalog.

use tracing::debug;
use vitrina_core::CollectionId;

use crate::catalog::types::{Collection, Product};

/// Which collection the visitor is browsing, if any.
#[derive(Debug, Clone)]
pub struct CollectionBrowse<'a> {
    collections: &'a [Collection],
    selected: Option<CollectionId>,
}

impl<'a> CollectionBrowse<'a> {
    /// Create a browse over these collections, showing all products.
    #[must_use]
    pub const fn new(collections: &'a [Collection]) -> Self {
        Self {
            collections,
            selected: None,
        }
    }

    /// Every collection, in catalog order.
    #[must_use]
    pub const fn collections(&self) -> &'a [Collection] {
        self.collections
    }

    /// Collections flagged for the featured rail, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &'a Collection> {
        self.collections.iter().filter(|c| c.featured)
    }

    /// The active collection's id, if one is active.
    #[must_use]
    pub const fn selected_id(&self) -> Option<&CollectionId> {
        self.selected.as_ref()
    }

    /// The active collection, if one is active.
    #[must_use]
    pub fn selected(&self) -> Option<&'a Collection> {
        let id = self.selected.as_ref()?;
        self.collections.iter().find(|c| &c.id == id)
    }

    /// Switch to a collection.
    ///
    /// An id not present in the catalog is ignored without touching the
    /// current state.
    pub fn view_collection(&mut self, id: &CollectionId) {
        if !self.collections.iter().any(|c| &c.id == id) {
            debug!(collection = %id, "ignoring switch to unknown collection");
            return;
        }
        self.selected = Some(id.clone());
    }

    /// Return to showing every product.
    pub fn show_all(&mut self) {
        self.selected = None;
    }

    /// The products the active view shows, in catalog order.
    ///
    /// All of `products` when no collection is active, otherwise the members
    /// of the active collection.
    #[must_use]
    pub fn visible_products<'p>(&self, products: &'p [Product]) -> Vec<&'p Product> {
        self.selected().map_or_else(
            || products.iter().collect(),
            |collection| {
                products
                    .iter()
                    .filter(|product| collection.contains(&product.id))
                    .collect()
            },
        )
    }
}
