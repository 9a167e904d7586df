// web_app/filter.rs - Pure filtering and pagination logic
//
// Everything here is a pure function of (products, filters). The page
// component wires these into derived signals; tests exercise them directly.

use crate::web_app::model::{CatalogFilters, Product};

/// Apply the category, price and search predicates in that order.
///
/// - An empty category selection keeps every product; a non-empty one keeps
///   products whose category is selected.
/// - The price ceiling is inclusive: `price == max_price` passes.
/// - An empty search term keeps every product; a non-empty one matches the
///   title case-insensitively as a substring.
///
/// The result is always a subset of `products`, in the original order.
pub fn apply_filters(products: &[Product], filters: &CatalogFilters) -> Vec<Product> {
    let needle = filters.search_term.to_lowercase();

    products
        .iter()
        .filter(|p| filters.selected_categories.is_empty() || filters.is_selected(&p.category))
        .filter(|p| p.price <= filters.max_price)
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// First index of the given 1-based page.
pub fn start_index(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

/// The visible slice for a page, clipped to the list length.
///
/// Paging past the end yields an empty slice rather than an error.
pub fn page_slice(filtered: &[Product], page: usize, page_size: usize) -> &[Product] {
    let start = start_index(page, page_size).min(filtered.len());
    let end = (start + page_size).min(filtered.len());
    &filtered[start..end]
}

/// Whether the Previous control is enabled.
pub fn has_previous(page: usize) -> bool {
    page > 1
}

/// Whether the Next control is enabled: there must be at least one item
/// beyond the end of the current page.
pub fn has_next(page: usize, page_size: usize, total: usize) -> bool {
    start_index(page, page_size) + page_size < total
}
