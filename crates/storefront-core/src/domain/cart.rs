//! Cart aggregate: lines, state, and the transition function.
//!
//! `CartState` is the entire state space of the cart and
//! [`CartState::transition`] is the only way to advance it. Every action
//! is a total, memoryless mapping from one state to the next: there are
//! no intermediate states, no failure modes, and absent targets degrade
//! to no-ops rather than errors.
//!
//! The line sequence is a persistent [`im::Vector`], so unaffected lines
//! are structurally shared between successive states. That sharing is an
//! optimization only; equality semantics are by content.
//!
//! # Invariants
//!
//! 1. At most one line per product identifier, maintained by the
//!    transition rules themselves rather than a separate uniqueness pass
//! 2. Every line's quantity is at least 1 (`Quantity` cannot be zero)
//! 3. Insertion order is preserved; quantity changes never reorder lines

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::domain::actions::CartAction;
use crate::domain::catalog::{Product, ProductId};
use crate::domain::quantity::Quantity;

// ============================================================================
// CART LINE
// ============================================================================

/// One product entry in the cart.
///
/// The display fields are copies taken from the catalog descriptor at
/// insertion time; later catalog changes do not rewrite existing lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier, unique within the cart
    pub id: ProductId,
    /// Display name copied from the catalog
    pub title: String,
    /// Unit price copied from the catalog
    pub price: f64,
    /// Image URL copied from the catalog
    pub image: String,
    /// Number of units, always >= 1
    pub quantity: Quantity,
}

impl CartLine {
    /// The initial line for a product.
    ///
    /// Quantity starts at 1 regardless of anything the payload may carry;
    /// repeat adds go through the merge rule instead.
    #[must_use]
    pub fn first_of(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: Quantity::ONE,
        }
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity.get())
    }

    /// The same line with a different quantity.
    fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

// ============================================================================
// CART STATE
// ============================================================================

/// The aggregate cart state: an ordered sequence of lines.
///
/// Created empty at application start, advanced only through
/// [`CartState::transition`], and discarded with its owning scope. The
/// line sequence is private so the uniqueness and quantity invariants
/// cannot be broken from outside the transition rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Lines in insertion order
    lines: Vector<CartLine>,
}

impl CartState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// The empty cart, the initial state of every session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up the line for a product, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Whether a line exists for the identifier.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    // ========================================================================
    // TRANSITION FUNCTION
    // ========================================================================

    /// Compute the next state for one action.
    ///
    /// Pure and total: no action can fail, the input is never mutated,
    /// and absent targets leave the result equal in content to the input.
    /// The match is exhaustive with an explicit identity arm, so a new
    /// action kind cannot be swallowed silently by a wildcard.
    #[must_use]
    pub fn transition(&self, action: &CartAction) -> Self {
        match action {
            CartAction::AddItem(product) => self.add_item(product),
            CartAction::RemoveItem { id } => self.remove_item(*id),
            CartAction::ClearCart => Self::new(),
            CartAction::IncreaseQuantity { id } => self.increase_quantity(*id),
            CartAction::DecreaseQuantity { id } => self.decrease_quantity(*id),
            CartAction::Unknown => self.clone(),
        }
    }

    // ========================================================================
    // TRANSITION RULES
    // ========================================================================

    /// Merge a product into the cart.
    ///
    /// An existing line for the identifier gains one unit in place; a new
    /// product is appended at the end with quantity 1. Line order never
    /// changes on a merge.
    fn add_item(&self, product: &Product) -> Self {
        if self.contains(product.id) {
            self.map_line(product.id, Quantity::increment)
        } else {
            let mut lines = self.lines.clone();
            lines.push_back(CartLine::first_of(product));
            Self { lines }
        }
    }

    /// Exclude every line matching the identifier.
    fn remove_item(&self, id: ProductId) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .filter(|line| line.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Add one unit to the matching line.
    fn increase_quantity(&self, id: ProductId) -> Self {
        self.map_line(id, Quantity::increment)
    }

    /// Remove one unit from the matching line, floored at one.
    ///
    /// A line leaves the cart only through an explicit removal or a full
    /// clear, never by decrementing to zero.
    fn decrease_quantity(&self, id: ProductId) -> Self {
        self.map_line(id, Quantity::saturating_decrement)
    }

    /// Apply a quantity update to every line matching `id`.
    ///
    /// A full scan of the sequence: if duplicate identifiers could ever
    /// exist, all of them are updated identically, and an absent
    /// identifier produces a state equal to the input.
    fn map_line(&self, id: ProductId, update: impl Fn(Quantity) -> Quantity) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .map(|line| {
                    if line.id == id {
                        line.with_quantity(update(line.quantity))
                    } else {
                        line.clone()
                    }
                })
                .collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
