//! Filtered, sorted view of the product collection.
//!
//! The view is always rebuilt from scratch for a given filter state. There is
//! no incremental update and no cache here; the owner decides when to rebuild.

use catalog_products::Product;

use crate::state::{FilterState, SortMode};

/// Whether `product` satisfies every active criterion.
pub fn matches(product: &Product, state: &FilterState) -> bool {
    let needle = state.search.to_lowercase();
    matches_with_needle(product, state, &needle)
}

fn matches_with_needle(product: &Product, state: &FilterState, needle: &str) -> bool {
    let category = state.selected_categories.is_empty()
        || state.selected_categories.contains(&product.category());
    let price = state.price_range.contains(product.price());
    let stock = !state.in_stock_only || product.in_stock();
    let search = needle.is_empty() || product.name().to_lowercase().contains(needle);

    category && price && stock && search
}

/// Filter `products` by `state` and order the result by its sort mode.
///
/// Price sorts are stable: equal prices keep their source order.
pub fn project(products: &[Product], state: &FilterState) -> Vec<Product> {
    let needle = state.search.to_lowercase();
    let mut results: Vec<Product> = products
        .iter()
        .filter(|p| matches_with_needle(p, state, &needle))
        .cloned()
        .collect();

    match state.sort {
        SortMode::None => {}
        SortMode::PriceAsc => results.sort_by(|a, b| a.price().total_cmp(&b.price())),
        SortMode::PriceDesc => results.sort_by(|a, b| b.price().total_cmp(&a.price())),
    }

    results
}
