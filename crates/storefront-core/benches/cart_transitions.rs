#![allow(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

//! Benchmark cart state transitions.
//!
//! Every transition is a full scan over the line sequence, so the
//! interesting axis is cart size: these benchmarks measure the append
//! and merge paths of an add, quantity updates mid-cart, removal, and a
//! full clear against carts of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storefront_core::{CartAction, CartState, Product, ProductId};

const CART_SIZES: [u64; 3] = [10, 100, 1000];

// ============================================================================
// FIXTURES
// ============================================================================

/// Create a catalog product for benchmarks
fn test_product(id: u64) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Product {id}"),
        19.99,
        "electronics",
        "Benchmark fixture",
        format!("https://example.com/{id}.jpg"),
    )
}

/// Create a cart holding `size` distinct lines
fn cart_with(size: u64) -> CartState {
    (0..size).fold(CartState::new(), |state, id| {
        state.transition(&CartAction::add_item(test_product(id)))
    })
}

// ============================================================================
// BENCHMARKS: AddItem
// ============================================================================

fn bench_add_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_add_item");

    for size in CART_SIZES {
        let state = cart_with(size);

        let appended = CartAction::add_item(test_product(size + 1));
        group.bench_with_input(BenchmarkId::new("append", size), &state, |b, state| {
            b.iter(|| state.transition(black_box(&appended)));
        });

        let merged = CartAction::add_item(test_product(size / 2));
        group.bench_with_input(BenchmarkId::new("merge", size), &state, |b, state| {
            b.iter(|| state.transition(black_box(&merged)));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARKS: Quantity updates
// ============================================================================

fn bench_quantity_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_quantity");

    for size in CART_SIZES {
        let state = cart_with(size);
        let mid = ProductId::new(size / 2);

        let increase = CartAction::increase_quantity(mid);
        group.bench_with_input(BenchmarkId::new("increase", size), &state, |b, state| {
            b.iter(|| state.transition(black_box(&increase)));
        });

        let decrease = CartAction::decrease_quantity(mid);
        group.bench_with_input(BenchmarkId::new("decrease", size), &state, |b, state| {
            b.iter(|| state.transition(black_box(&decrease)));
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARKS: RemoveItem and ClearCart
// ============================================================================

fn bench_remove_and_clear(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_remove_and_clear");

    for size in CART_SIZES {
        let state = cart_with(size);

        let remove = CartAction::remove_item(ProductId::new(size / 2));
        group.bench_with_input(BenchmarkId::new("remove", size), &state, |b, state| {
            b.iter(|| state.transition(black_box(&remove)));
        });

        group.bench_with_input(BenchmarkId::new("clear", size), &state, |b, state| {
            b.iter(|| state.transition(black_box(&CartAction::ClearCart)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_item,
    bench_quantity_updates,
    bench_remove_and_clear
);
criterion_main!(benches);
