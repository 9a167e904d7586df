// lib.rs - Root module for the catalog-browser library

/// The fixtures module contains reusable sample catalog data for tests
pub mod fixtures;

/// The Leptos application: model, filter engine, fetch and UI
pub mod web_app;
