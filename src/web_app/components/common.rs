// web_app/components/common.rs - Reusable UI components
//
// Small, stateless components that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Empty-result indicator
///
/// Shown when the current page of the filtered catalog has nothing in it.
#[component]
pub fn EmptyState(
    #[prop(default = "No products found.")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-gray-300 text-6xl mb-4">"🔍"</div>
            <h3 class="text-xl font-bold text-gray-900 mb-2">{message}</h3>
            <p class="text-gray-500 max-w-md mx-auto">
                "Try adjusting your filters or search term."
            </p>
        </div>
    }
}
