//! Cart state container.
//!
//! The imperative shell around the pure cart core. A `CartStore` owns the
//! current [`CartState`] for the lifetime of its scope, replaces it
//! wholesale on every dispatch, and hands out read-only snapshots.
//! Consumers re-read after dispatching; a previous state value is never
//! mutated in place.
//!
//! All cart semantics live in [`CartState::transition`]; this type only
//! swaps snapshots and reports what happened through `tracing`.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use tracing::debug;

use crate::domain::actions::CartAction;
use crate::domain::cart::CartState;

/// Process-wide cart state container.
///
/// Starts empty at application start, is advanced only through
/// [`CartStore::dispatch`], and carries no teardown side effects when
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Create a store holding the empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply one action and return the resulting state.
    ///
    /// Transitions are strictly serialized through the `&mut` receiver;
    /// the previous state value is replaced, never mutated.
    pub fn dispatch(&mut self, action: &CartAction) -> &CartState {
        let next = self.state.transition(action);
        debug!(
            action = %action.kind(),
            lines = next.len(),
            items = next.total_items(),
            "cart transition applied"
        );
        self.state = next;
        &self.state
    }

    /// Reset to the empty cart.
    pub fn reset(&mut self) {
        debug!("cart store reset");
        self.state = CartState::new();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Product, ProductId};

    fn mug() -> Product {
        Product::new(
            ProductId::new(11),
            "Camp Mug",
            14.5,
            "kitchen",
            "Enamel camp mug",
            "https://example.com/mug.jpg",
        )
    }

    #[test]
    fn test_store_starts_empty() {
        let store = CartStore::new();
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_dispatch_replaces_state_wholesale() {
        let mut store = CartStore::new();
        let before = store.state().clone();

        store.dispatch(&CartAction::add_item(mug()));

        assert!(before.is_empty());
        assert_eq!(store.state().len(), 1);
        assert_eq!(store.state().total_items(), 1);
    }

    #[test]
    fn test_dispatch_sequence_is_serialized() {
        let mut store = CartStore::new();
        store.dispatch(&CartAction::add_item(mug()));
        store.dispatch(&CartAction::add_item(mug()));
        store.dispatch(&CartAction::increase_quantity(ProductId::new(11)));

        let line = store.state().line(ProductId::new(11)).expect("line present");
        assert_eq!(line.quantity.get(), 3);
    }

    #[test]
    fn test_unknown_action_leaves_state_untouched() {
        let mut store = CartStore::new();
        store.dispatch(&CartAction::add_item(mug()));
        let before = store.state().clone();

        store.dispatch(&CartAction::Unknown);

        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_reset_empties_the_cart() {
        let mut store = CartStore::new();
        store.dispatch(&CartAction::add_item(mug()));
        store.reset();

        assert!(store.state().is_empty());
    }
}
