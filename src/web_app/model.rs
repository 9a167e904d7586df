// web_app/model.rs - Data model for the catalog browser
//
// These types describe the remote payload and the user-controlled filter
// state. The product list is fetched once and never mutated; everything
// else in the app is derived from it plus `CatalogFilters`.

use serde::{Deserialize, Serialize};

/// The fixed category set offered in the filter sidebar.
///
/// This list is static and independent of the fetched data: a category that
/// only exists in the payload is never offered as a checkbox, and a checkbox
/// whose category is absent from the payload simply matches nothing.
pub const CATEGORIES: [&str; 6] = [
    "smartphones",
    "laptops",
    "fragrances",
    "skincare",
    "groceries",
    "home-decoration",
];

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 9;

/// Bounds of the max-price slider.
pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 1000.0;

/// A catalog item as delivered by the products endpoint.
///
/// The payload carries more fields than these; serde ignores the rest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub thumbnail: String,
}

/// Wire envelope of the products endpoint: `{ "products": [...] }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// User-controlled filter, search and pagination state.
///
/// Invariant: any change to the category selection, the price ceiling or
/// the search term resets `page` to 1. Only `set_page` may move the page,
/// and it touches nothing else. All mutation goes through the methods
/// below so the invariant holds everywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilters {
    pub selected_categories: Vec<String>,
    pub max_price: f64,
    pub search_term: String,
    pub page: usize,
}

impl Default for CatalogFilters {
    fn default() -> Self {
        Self {
            selected_categories: Vec::new(),
            max_price: MAX_PRICE,
            search_term: String::new(),
            page: 1,
        }
    }
}

impl CatalogFilters {
    /// Add the category to the selection, or remove it if already selected.
    /// Resets the page.
    pub fn toggle_category(&mut self, category: &str) {
        self.page = 1;
        if let Some(pos) = self.selected_categories.iter().position(|c| c == category) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(category.to_string());
        }
    }

    /// Set the price ceiling. Resets the page.
    pub fn set_max_price(&mut self, price: f64) {
        self.page = 1;
        self.max_price = price;
    }

    /// Set the search term. Resets the page.
    pub fn set_search_term(&mut self, term: String) {
        self.page = 1;
        self.search_term = term;
    }

    /// Move to another page. Leaves all filter fields untouched.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected_categories.iter().any(|c| c == category)
    }
}
