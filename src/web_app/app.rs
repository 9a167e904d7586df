// web_app/app.rs - Root application component
//
// Sets up meta tags, routing and the 404 fallback.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::CatalogPage;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text="Product Catalog" />
        <Meta name="description" content="Browse the product catalog with category, price and search filters" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <main class="min-h-screen bg-gray-50">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                    <Route path=path!("/catalog") view=CatalogPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Go to Catalog"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_paths() {
        let root_path = "/";
        let catalog_path = "/catalog";

        assert_eq!(root_path, "/");
        assert!(catalog_path.starts_with('/'));
    }

    #[test]
    fn test_app_title() {
        let title = "Product Catalog";
        assert!(!title.is_empty());
        assert!(title.len() < 100);
    }
}
