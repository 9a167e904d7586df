// web_app/pages/mod.rs - Page-level components

pub mod catalog;

pub use catalog::CatalogPage;
