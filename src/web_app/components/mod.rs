// web_app/components/mod.rs - UI component modules

pub mod common;
pub mod product;
pub mod search;

pub use common::{EmptyState, Loading};
pub use product::{ProductCard, ProductGrid};
pub use search::{CategoryFilter, FilterSidebar, Pagination, PriceSlider, SearchBox};
