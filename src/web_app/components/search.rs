// web_app/components/search.rs - Filter and pagination controls
//
// These components render the sidebar controls and the pagination bar:
// - SearchBox: free-text title search
// - CategoryFilter: one checkbox per fixed category
// - PriceSlider: max-price range input
// - FilterSidebar: composes the three controls
// - Pagination: Previous/Next buttons with a page label
//
// All of them mutate the shared `CatalogFilters` signal through its
// methods, so the page-reset invariant is enforced in one place.

use leptos::prelude::*;

use crate::web_app::filter;
use crate::web_app::model::{CatalogFilters, CATEGORIES, MAX_PRICE, MIN_PRICE, PAGE_SIZE};

/// Free-text search input.
///
/// Updates the search term on every input event; there is no debounce and
/// no submit button.
#[component]
pub fn SearchBox(
    /// Shared filter state
    filters: RwSignal<CatalogFilters>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h2 class="font-semibold text-lg text-gray-700">"Search"</h2>
            <input
                type="text"
                placeholder="Search products..."
                class="border border-gray-300 px-4 py-2 rounded-md w-full \
                       focus:ring-2 focus:ring-blue-500 focus:outline-none"
                prop:value=move || filters.with(|f| f.search_term.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    filters.update(|f| f.set_search_term(term));
                }
            />
        </div>
    }
}

/// Category checkbox list.
///
/// The categories are the fixed `CATEGORIES` set, not derived from the
/// fetched data. An empty selection means no category constraint.
#[component]
pub fn CategoryFilter(
    /// Shared filter state
    filters: RwSignal<CatalogFilters>,
) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <h2 class="font-semibold text-lg text-gray-700 mt-6">"Categories"</h2>
            {CATEGORIES
                .into_iter()
                .map(|category| {
                    view! {
                        <label class="block text-gray-600 cursor-pointer hover:text-gray-900">
                            <input
                                type="checkbox"
                                class="mr-2 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                                prop:checked=move || filters.with(|f| f.is_selected(category))
                                on:change=move |_| {
                                    filters.update(|f| f.toggle_category(category));
                                }
                            />
                            {category}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Max-price range slider (1-1000), inclusive ceiling.
#[component]
pub fn PriceSlider(
    /// Shared filter state
    filters: RwSignal<CatalogFilters>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h2 class="font-semibold text-lg text-gray-700 mt-6">
                "Max Price: $" {move || filters.with(|f| format!("{:.0}", f.max_price))}
            </h2>
            <input
                type="range"
                min=format!("{MIN_PRICE:.0}")
                max=format!("{MAX_PRICE:.0}")
                class="w-full accent-blue-500"
                prop:value=move || filters.with(|f| format!("{:.0}", f.max_price))
                on:input=move |ev| {
                    if let Ok(price) = event_target_value(&ev).parse::<f64>() {
                        filters.update(|f| f.set_max_price(price));
                    }
                }
            />
        </div>
    }
}

/// Sidebar composing search, category and price controls.
#[component]
pub fn FilterSidebar(
    /// Shared filter state
    filters: RwSignal<CatalogFilters>,
) -> impl IntoView {
    view! {
        <aside class="space-y-4">
            <SearchBox filters=filters />
            <CategoryFilter filters=filters />
            <PriceSlider filters=filters />
        </aside>
    }
}

/// Previous/Next pagination bar with a page-number label.
///
/// Previous is enabled only past page 1; Next only while at least one item
/// lies beyond the current page. Moving the page leaves every filter field
/// untouched.
#[component]
pub fn Pagination(
    /// Shared filter state (source of the current page)
    filters: RwSignal<CatalogFilters>,
    /// Length of the filtered product list
    total_items: Signal<usize>,
) -> impl IntoView {
    let page = move || filters.with(|f| f.page);
    let can_go_prev = move || filter::has_previous(page());
    let can_go_next = move || filter::has_next(page(), PAGE_SIZE, total_items.get());

    let go_prev = move |_| {
        if can_go_prev() {
            filters.update(|f| f.set_page(f.page - 1));
        }
    };

    let go_next = move |_| {
        if can_go_next() {
            filters.update(|f| f.set_page(f.page + 1));
        }
    };

    let button_class = "px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 \
                        disabled:opacity-50 disabled:cursor-not-allowed";

    view! {
        <div class="flex justify-between items-center mt-8">
            <button
                type="button"
                class=button_class
                disabled=move || !can_go_prev()
                on:click=go_prev
            >
                "Previous"
            </button>

            <span class="text-gray-700">"Page " {page}</span>

            <button
                type="button"
                class=button_class
                disabled=move || !can_go_next()
                on:click=go_next
            >
                "Next"
            </button>
        </div>
    }
}
