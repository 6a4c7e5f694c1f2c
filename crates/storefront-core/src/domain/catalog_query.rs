//! Catalog search and filtering
//!
//! Provides functional filtering and sorting for product lists using:
//! - Value objects for filter criteria
//! - Iterator pipelines with `itertools` and `tap::Pipe`
//!
//! # Architecture
//!
//! This module is pure **calculations** tier (no I/O):
//! - `ProductFilter` - value object for filter criteria
//! - `ProductSort` - sort field and direction
//! - `filter_products()` - pure function for filtering
//! - `sort_products()` - pure function for sorting
//! - `apply_query()` - compose filter + sort + paginate
//!
//! The search page composes these over whatever product list the catalog
//! layer supplies; an empty result is an empty vector, never an error.

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tap::Pipe;

use crate::domain::catalog::Product;

// ============================================================================
// PRODUCT FILTER VALUE OBJECT
// ============================================================================

/// Filter criteria for catalog queries.
///
/// All fields are optional - `None` means "don't filter by this
/// criteria", so the default filter matches every product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Filter by title (substring match, case-insensitive)
    #[serde(default)]
    pub title_contains: Option<String>,
    /// Filter by category (exact match, case-insensitive)
    #[serde(default)]
    pub category: Option<String>,
    /// Keep products priced at or above this bound
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Keep products priced at or below this bound
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl ProductFilter {
    /// Create a new empty filter (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by title substring (case-insensitive).
    #[must_use]
    pub fn with_title_contains(mut self, pattern: impl Into<String>) -> Self {
        self.title_contains = Some(pattern.into());
        self
    }

    /// Filter by category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep products priced at or above `min`.
    #[must_use]
    pub const fn with_min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    /// Keep products priced at or below `max`.
    #[must_use]
    pub const fn with_max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Check if a product matches this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        // Title filter (case-insensitive substring)
        let title_match = self.title_contains.as_ref().map_or(true, |pattern| {
            product
                .title
                .to_lowercase()
                .contains(&pattern.to_lowercase())
        });

        // Category filter (case-insensitive equality)
        let category_match = self
            .category
            .as_ref()
            .map_or(true, |category| product.category.eq_ignore_ascii_case(category));

        // Price bounds
        let min_match = self.min_price.map_or(true, |min| product.price >= min);
        let max_match = self.max_price.map_or(true, |max| product.price <= max);

        title_match && category_match && min_match && max_match
    }
}

// ============================================================================
// PRODUCT SORT
// ============================================================================

/// Sort field for catalog queries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProductSortField {
    #[default]
    /// Sort by product title
    Title,
    /// Sort by unit price
    Price,
    /// Sort by product identifier
    Id,
}

/// Sort direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort specification for catalog queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSort {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl ProductSort {
    /// Create a new sort specification.
    #[must_use]
    pub const fn new(field: ProductSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Sort by title ascending.
    #[must_use]
    pub const fn by_title_asc() -> Self {
        Self::new(ProductSortField::Title, SortDirection::Asc)
    }

    /// Sort by price ascending.
    #[must_use]
    pub const fn by_price_asc() -> Self {
        Self::new(ProductSortField::Price, SortDirection::Asc)
    }

    /// Sort by price descending.
    #[must_use]
    pub const fn by_price_desc() -> Self {
        Self::new(ProductSortField::Price, SortDirection::Desc)
    }
}

// ============================================================================
// PRODUCT QUERY
// ============================================================================

/// Complete query specification for the catalog.
///
/// Combines filter, sort, and pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: Option<ProductSort>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl ProductQuery {
    /// Create a new query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter.
    #[must_use]
    pub fn with_filter(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Add sorting.
    #[must_use]
    pub fn with_sort(mut self, sort: ProductSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Add offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add limit.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Filter by title substring (delegates to filter).
    #[must_use]
    pub fn with_title_contains(mut self, pattern: impl Into<String>) -> Self {
        self.filter = self.filter.with_title_contains(pattern);
        self
    }
}

// ============================================================================
// QUERY FUNCTIONS
// ============================================================================

/// Filter products based on filter criteria.
///
/// Pure function - no side effects, deterministic.
#[must_use]
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}

/// Sort products based on sort specification.
///
/// Pure function - no side effects, deterministic. Prices order through
/// `f64::total_cmp`, so a NaN price cannot poison the ordering.
#[must_use]
pub fn sort_products(products: &[Product], sort: &ProductSort) -> Vec<Product> {
    match (sort.field, sort.direction) {
        (ProductSortField::Title, SortDirection::Asc) => products
            .iter()
            .sorted_by_key(|p| p.title.to_lowercase())
            .cloned()
            .collect(),
        (ProductSortField::Title, SortDirection::Desc) => products
            .iter()
            .sorted_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
            .cloned()
            .collect(),
        (ProductSortField::Price, SortDirection::Asc) => products
            .iter()
            .sorted_by(|a, b| a.price.total_cmp(&b.price))
            .cloned()
            .collect(),
        (ProductSortField::Price, SortDirection::Desc) => products
            .iter()
            .sorted_by(|a, b| b.price.total_cmp(&a.price))
            .cloned()
            .collect(),
        (ProductSortField::Id, SortDirection::Asc) => {
            products.iter().sorted_by_key(|p| p.id).cloned().collect()
        }
        (ProductSortField::Id, SortDirection::Desc) => products
            .iter()
            .sorted_by(|a, b| b.id.cmp(&a.id))
            .cloned()
            .collect(),
    }
}

/// Paginate products (skip + take).
///
/// Pure function - no side effects.
#[must_use]
pub fn paginate_products(
    products: &[Product],
    offset: Option<usize>,
    limit: Option<usize>,
) -> Vec<Product> {
    let offset = offset.unwrap_or(0);
    let limit = limit.unwrap_or(products.len());
    products.iter().skip(offset).take(limit).cloned().collect()
}

/// Apply a complete query (filter + sort + paginate).
///
/// Uses `tap::Pipe` for functional composition.
#[must_use]
pub fn apply_query(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    products
        .pipe(|p| filter_products(p, &query.filter))
        .pipe(|p| {
            query
                .sort
                .as_ref()
                .map_or(p.clone(), |sort| sort_products(&p, sort))
        })
        .pipe(|p| paginate_products(&p, query.offset, query.limit))
}

// ============================================================================
// TESTS
// ============================================================================
