//! Catalog product types.
//!
//! Products are descriptors supplied by an external catalog source; the
//! cart copies the display fields it needs when a line is created. The
//! display fields are opaque here: the catalog is taken as-is and no
//! validation is applied to titles, categories, descriptions, or image
//! URLs. Price is a bare number with no currency handling.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRODUCT IDENTIFIER
// ============================================================================

/// Numeric product identifier.
///
/// Unique within the catalog and, by the cart's transition rules, unique
/// within a cart's line collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw numeric identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// PRODUCT DESCRIPTOR
// ============================================================================

/// A product as served by the catalog.
///
/// This is the payload an add-to-cart action carries. The cart keeps its
/// own copy of the fields it displays, so later catalog changes do not
/// rewrite lines already in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,
    /// Display name
    pub title: String,
    /// Unit price (opaque, no currency handling)
    pub price: f64,
    /// Category label
    pub category: String,
    /// Long-form description
    pub description: String,
    /// Image URL
    pub image: String,
}

impl Product {
    /// Create a product descriptor.
    #[must_use]
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            description: description.into(),
            image: image.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
