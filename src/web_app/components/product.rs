// web_app/components/product.rs - Product display components
//
// - ProductCard: one catalog item in the grid
// - ProductGrid: the responsive grid of cards for the visible page

use leptos::prelude::*;

use crate::web_app::model::Product;

/// Product card for the catalog grid.
///
/// Shows thumbnail, title, category label and a `$`-prefixed price. The
/// card has no interactions: no detail view, no add-to-cart.
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let price_display = format!("${:.2}", product.price);

    view! {
        <div class="rounded-xl shadow-lg p-4 border border-gray-200 bg-white \
                    hover:shadow-xl transition-shadow">
            <img
                src=product.thumbnail.clone()
                alt=product.title.clone()
                class="w-full h-40 object-cover rounded-md"
            />
            <h3 class="mt-3 font-semibold text-gray-800">{product.title.clone()}</h3>
            <p class="text-sm text-gray-600">{product.category.clone()}</p>
            <p class="text-sm font-bold text-green-600">{price_display}</p>
        </div>
    }
}

/// Responsive grid of product cards for the current page.
#[component]
pub fn ProductGrid(
    /// The visible slice of the filtered catalog
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
            <For
                each=move || products.get()
                key=|p| p.id
                children=move |product| {
                    view! { <ProductCard product=product /> }
                }
            />
        </div>
    }
}
