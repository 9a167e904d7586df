// web_app/pages/catalog.rs - Catalog browser page
//
// Owns all widget state: the fetched product list, the loading flag and
// the filter state. Everything the view shows is derived from those three
// signals, so the filtered list is always consistent with the current
// inputs before the next render.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::fetch_products;
use crate::web_app::components::{EmptyState, FilterSidebar, Loading, Pagination, ProductGrid};
use crate::web_app::filter;
use crate::web_app::model::{CatalogFilters, Product, PAGE_SIZE};

/// Main catalog page.
///
/// Fetches the product collection once on creation, then filters and
/// paginates it client-side as the user works the sidebar controls.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let filters = RwSignal::new(CatalogFilters::default());

    // One fetch for the lifetime of the view. `try_set` makes a response
    // that arrives after the view was disposed a no-op instead of a write
    // to a dead signal. A failed fetch leaves `loading` set, so the view
    // stays on the loading indicator; there is no retry and no error UI.
    spawn_local(async move {
        match fetch_products().await {
            Ok(list) => {
                products.try_set(list);
                loading.try_set(false);
            }
            Err(err) => {
                tracing::error!(error = %err, "product fetch failed");
            }
        }
    });

    // Recomputed whenever the product list or any filter field changes.
    let filtered = Memo::new(move |_| {
        let catalog = products.get();
        filters.with(|f| filter::apply_filters(&catalog, f))
    });

    let total_items = Signal::derive(move || filtered.with(|f| f.len()));

    let visible = Signal::derive(move || {
        let page = filters.with(|f| f.page);
        filtered.with(|f| filter::page_slice(f, page, PAGE_SIZE).to_vec())
    });

    view! {
        <div class="p-6 max-w-7xl mx-auto">
            <h1 class="text-3xl font-extrabold mb-6 text-gray-800">"Product Listing"</h1>

            <div class="mb-6 grid grid-cols-1 md:grid-cols-4 gap-6">
                // Sidebar
                <FilterSidebar filters=filters />

                // Main content
                <div class="md:col-span-3">
                    {move || {
                        if loading.get() {
                            view! { <Loading message="Loading products..." /> }.into_any()
                        } else if visible.with(|v| v.is_empty()) {
                            view! { <EmptyState /> }.into_any()
                        } else {
                            view! { <ProductGrid products=visible /> }.into_any()
                        }
                    }}

                    <Pagination filters=filters total_items=total_items />
                </div>
            </div>
        </div>
    }
}
