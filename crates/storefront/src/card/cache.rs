//! Memoization for derived card state.
//!
//! Derivation is pure, so a (product, selection) pair always maps to the
//! same [`CardState`]. The cache key folds the selection fingerprint in,
//! which keeps distinct selections of one product apart while letting
//! repeated renders of a popular combination share one derivation. Entries
//! never expire: within one catalog load nothing they depend on can change,
//! so staleness is handled by dropping the whole cache on reload.

use moka::sync::Cache;
use tracing::debug;
use vitrina_core::ProductId;

use super::selection::Selection;
use super::{CardState, ProductCard};

/// Cache key for one product under one selection.
fn cache_key(product: &ProductId, selection: &Selection) -> String {
    format!("card:{product}:{}", selection.fingerprint())
}

/// Capacity-bound memo of derived card states.
#[derive(Debug, Clone)]
pub struct CardStateCache {
    states: Cache<String, CardState>,
}

impl CardStateCache {
    /// Create a cache holding at most `max_capacity` derived states.
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        let states = Cache::builder().max_capacity(max_capacity).build();
        Self { states }
    }

    /// The cached state for the card's current selection, deriving and
    /// storing it on a miss.
    #[must_use]
    pub fn get_or_derive(&self, card: &ProductCard<'_>) -> CardState {
        let key = cache_key(&card.product().id, card.selection());

        if let Some(state) = self.states.get(&key) {
            debug!(%key, "Cache hit for card state");
            return state;
        }

        let state = card.derive();
        self.states.insert(key, state.clone());
        state
    }

    /// Whether a state is cached for this product and selection.
    #[must_use]
    pub fn contains(&self, product: &ProductId, selection: &Selection) -> bool {
        self.states.contains_key(&cache_key(product, selection))
    }

    /// Drop every cached state. Called when a new catalog is loaded.
    pub fn invalidate_all(&self) {
        self.states.invalidate_all();
        self.states.run_pending_tasks();
    }

    /// Number of cached states.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.states.run_pending_tasks();
        self.states.entry_count()
    }
}

impl Default for CardStateCache {
    /// A cache sized for a typical storefront grid.
    fn default() -> Self {
        Self::new(1000)
    }
}
