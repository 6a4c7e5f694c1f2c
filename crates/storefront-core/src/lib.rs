//! Storefront core - cart state machine and catalog calculations
//!
//! This crate provides:
//! - The shopping-cart state machine (`domain::cart`, `domain::actions`)
//! - Catalog product types (`domain::catalog`)
//! - Pure search and filter calculations (`domain::catalog_query`)
//! - The cart state container (`store`)
//!
//! The domain layer is pure **calculations** tier: deterministic, no I/O,
//! no hidden state. The only imperative piece is [`store::CartStore`],
//! which owns the current state snapshot for the surrounding application.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod store;

pub use domain::actions::{ActionKind, CartAction};
pub use domain::cart::{CartLine, CartState};
pub use domain::catalog::{Product, ProductId};
pub use domain::catalog_query::{
    apply_query, filter_products, paginate_products, sort_products, ProductFilter, ProductQuery,
    ProductSort, ProductSortField, SortDirection,
};
pub use domain::quantity::{Quantity, QuantityError};
pub use store::CartStore;
