// tests/pagination_tests.rs - Page slicing and control enablement
//
// Pagination is an index slice over the filtered list; these tests cover
// the math and the Previous/Next enablement rules in isolation.

use catalog_browser::fixtures::sample_products;
use catalog_browser::web_app::filter::{
    apply_filters, has_next, has_previous, page_slice, start_index,
};
use catalog_browser::web_app::model::{CatalogFilters, Product, PAGE_SIZE};

#[test]
fn page_k_shows_the_kth_nine_item_window() {
    let catalog = sample_products();
    let filtered = apply_filters(&catalog, &CatalogFilters::default());

    for page in 1..=3 {
        let slice = page_slice(&filtered, page, PAGE_SIZE);
        let start = start_index(page, PAGE_SIZE);
        let end = (start + PAGE_SIZE).min(filtered.len());
        assert_eq!(slice, &filtered[start..end], "window for page {page}");
    }
}

#[test]
fn previous_is_disabled_exactly_on_page_one() {
    assert!(!has_previous(1));
    for page in 2..10 {
        assert!(has_previous(page));
    }
}

#[test]
fn next_is_disabled_exactly_when_the_slice_end_reaches_the_total() {
    // 20 items: slice end reaches 20 on page 3
    assert!(has_next(1, PAGE_SIZE, 20));
    assert!(has_next(2, PAGE_SIZE, 20));
    assert!(!has_next(3, PAGE_SIZE, 20));

    // multiples of the page size have no trailing partial page
    assert!(has_next(1, PAGE_SIZE, 18));
    assert!(!has_next(2, PAGE_SIZE, 18));

    // fewer items than one page
    assert!(!has_next(1, PAGE_SIZE, 5));
    assert!(!has_next(1, PAGE_SIZE, 0));
}

#[test]
fn overrunning_the_last_page_yields_an_empty_slice() {
    let catalog = sample_products();
    let filtered = apply_filters(&catalog, &CatalogFilters::default());

    assert!(page_slice(&filtered, 4, PAGE_SIZE).is_empty());
    assert!(page_slice(&filtered, 100, PAGE_SIZE).is_empty());
}

#[test]
fn empty_catalog_paginates_to_nothing() {
    let filtered: Vec<Product> = Vec::new();
    assert!(page_slice(&filtered, 1, PAGE_SIZE).is_empty());
    assert!(!has_next(1, PAGE_SIZE, filtered.len()));
    assert!(!has_previous(1));
}

#[test]
fn narrowing_a_filter_on_a_late_page_lands_back_on_page_one() {
    // the state-machine cycle: edit control -> page reset -> recompute
    let catalog = sample_products();
    let mut filters = CatalogFilters::default();

    filters.set_page(3);
    let filtered = apply_filters(&catalog, &filters);
    assert_eq!(page_slice(&filtered, filters.page, PAGE_SIZE).len(), 2);

    filters.toggle_category("skincare");
    assert_eq!(filters.page, 1);

    let filtered = apply_filters(&catalog, &filters);
    assert_eq!(filtered.len(), 3);
    assert_eq!(page_slice(&filtered, filters.page, PAGE_SIZE).len(), 3);
    assert!(!has_next(filters.page, PAGE_SIZE, filtered.len()));
}
