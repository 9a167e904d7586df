// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model.rs: data types and constants
// - filter.rs: pure filtering and pagination logic
// - api.rs: the one-shot catalog fetch
// - components/: reusable UI components
// - pages/: page-level components
// - app.rs: root application component with routing

pub mod api;
pub mod app;
pub mod components;
pub mod filter;
pub mod model;
pub mod pages;

// Re-export main app component for convenience
pub use app::App;
