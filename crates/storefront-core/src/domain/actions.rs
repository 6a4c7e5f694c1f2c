//! Cart actions.
//!
//! Actions are the tagged variant set the application layer dispatches
//! against the cart. Each variant carries exactly the payload its
//! semantics require: the full product descriptor for an add, the target
//! identifier for removal and quantity changes, nothing for a clear.
//!
//! The set is closed on the Rust side, but actions arriving through
//! deserialization can carry tags this version does not know. Those map
//! onto [`CartAction::Unknown`], which the transition function treats as
//! the identity, so a foreign action is tolerated rather than rejected.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumDiscriminants};

use crate::domain::catalog::{Product, ProductId};

// ============================================================================
// CART ACTION
// ============================================================================

/// An action dispatched against the cart.
///
/// Every variant is a total, memoryless mapping from one cart state to
/// the next; none of them can fail. Targets that are absent from the cart
/// degrade to no-ops inside the transition rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
#[strum_discriminants(name(ActionKind), derive(Display, Hash))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
pub enum CartAction {
    /// Add a product to the cart, merging into an existing line by
    /// identifier
    AddItem(Product),

    /// Remove every line matching the identifier
    RemoveItem {
        /// Target product identifier
        id: ProductId,
    },

    /// Reset the cart to the empty sequence
    ClearCart,

    /// Increment the matching line's quantity by one
    IncreaseQuantity {
        /// Target product identifier
        id: ProductId,
    },

    /// Decrement the matching line's quantity by one, floored at one
    DecreaseQuantity {
        /// Target product identifier
        id: ProductId,
    },

    /// Fallback for action tags this version does not recognize
    #[serde(other)]
    Unknown,
}

impl CartAction {
    /// The action kind, used for logging and diagnostics.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        ActionKind::from(self)
    }

    /// Create an add-to-cart action.
    #[must_use]
    pub const fn add_item(product: Product) -> Self {
        Self::AddItem(product)
    }

    /// Create a remove action for a product identifier.
    #[must_use]
    pub const fn remove_item(id: ProductId) -> Self {
        Self::RemoveItem { id }
    }

    /// Create an increase-quantity action for a product identifier.
    #[must_use]
    pub const fn increase_quantity(id: ProductId) -> Self {
        Self::IncreaseQuantity { id }
    }

    /// Create a decrease-quantity action for a product identifier.
    #[must_use]
    pub const fn decrease_quantity(id: ProductId) -> Self {
        Self::DecreaseQuantity { id }
    }
}

// ============================================================================
// TESTS
// ============================================================================
