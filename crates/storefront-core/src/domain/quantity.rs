//! Cart line quantity.
//!
//! `Quantity` wraps `NonZeroU32` so a cart line can never hold a zero
//! count: a line either exists with quantity >= 1 or it does not exist at
//! all. Encoding the rule in the type replaces the defensive runtime
//! filter that would otherwise have to sweep out zero-quantity lines
//! after every decrement.
//!
//! # Invariants
//!
//! 1. A constructed `Quantity` is always >= 1
//! 2. `saturating_decrement` floors at 1; removal of a line is an
//!    explicit cart operation, never a decrement side effect

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// DOMAIN ERRORS
// ============================================================================

/// Errors that can occur constructing a quantity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// Zero is not a representable quantity
    #[error("quantity must be at least 1")]
    Zero,
}

// ============================================================================
// QUANTITY VALUE TYPE
// ============================================================================

/// A positive line quantity.
///
/// Serialization is validating: a serialized `0` is rejected on
/// deserialization the same way `Quantity::new(0)` is at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Quantity of one, the value every new cart line starts at.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity from a raw count.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Zero` when `count` is zero.
    pub fn new(count: u32) -> Result<Self, QuantityError> {
        NonZeroU32::new(count).map(Self).ok_or(QuantityError::Zero)
    }

    /// The raw count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Quantity increased by one (saturating at `u32::MAX`).
    #[must_use]
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Quantity decreased by one, floored at one.
    #[must_use]
    pub fn saturating_decrement(self) -> Self {
        NonZeroU32::new(self.0.get() - 1).map_or(self, Self)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Quantity::new(0), Err(QuantityError::Zero));
    }

    #[test]
    fn test_new_accepts_positive() {
        let quantity = Quantity::new(3).expect("valid quantity");
        assert_eq!(quantity.get(), 3);
    }

    #[test]
    fn test_one_constant() {
        assert_eq!(Quantity::ONE.get(), 1);
        assert_eq!(Quantity::default(), Quantity::ONE);
    }

    #[test]
    fn test_increment() {
        let quantity = Quantity::ONE.increment();
        assert_eq!(quantity.get(), 2);
    }

    #[test]
    fn test_decrement_above_floor() {
        let quantity = Quantity::new(3).expect("valid quantity");
        assert_eq!(quantity.saturating_decrement().get(), 2);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        assert_eq!(Quantity::ONE.saturating_decrement(), Quantity::ONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quantity::new(5).expect("valid quantity").to_string(), "5");
    }
}
