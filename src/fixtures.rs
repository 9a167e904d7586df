// fixtures.rs - Reusable sample catalog data
//
// Tests need consistent data; instead of building different products in
// each test, the catalog is defined once here and reused everywhere.
//
// The shape of the data is deliberate:
// - 20 products total, so page size 9 gives pages of 9 / 9 / 2
// - exactly 5 laptops, so a laptops-only selection fits on one page
// - every price is above $50, so a $50 ceiling matches nothing
// - titles mix cases, so search tests can probe case-insensitivity

use crate::web_app::model::Product;

fn product(id: i64, title: &str, category: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        category: category.to_string(),
        price,
        thumbnail: format!("https://cdn.dummyjson.com/{id}/thumbnail.jpg"),
    }
}

/// The full sample catalog.
pub fn sample_products() -> Vec<Product> {
    vec![
        // Smartphones
        product(1, "Smartphone X", "smartphones", 549.0),
        product(2, "Budget Phone SE", "smartphones", 199.99),
        product(3, "Galaxy Fold Pro", "smartphones", 999.0),
        product(4, "Pixel Ultra", "smartphones", 799.0),
        product(5, "OnePlus Nord", "smartphones", 429.0),
        // Laptops (exactly five)
        product(6, "Gaming Laptop G15", "laptops", 949.0),
        product(7, "Ultrabook Air 13", "laptops", 899.0),
        product(8, "Workstation Pro 17", "laptops", 999.99),
        product(9, "Chromebook Duet", "laptops", 299.0),
        product(10, "Convertible Flip 14", "laptops", 649.0),
        // Fragrances
        product(11, "Rose Eau de Parfum", "fragrances", 120.0),
        product(12, "Oud Royale", "fragrances", 240.0),
        product(13, "Citrus Cologne", "fragrances", 85.0),
        // Skincare
        product(14, "Hydrating Serum", "skincare", 64.5),
        product(15, "Night Repair Cream", "skincare", 89.0),
        product(16, "Vitamin C Toner", "skincare", 54.99),
        // Groceries
        product(17, "Cold-Pressed Olive Oil", "groceries", 59.0),
        product(18, "Single-Origin Coffee", "groceries", 62.0),
        // Home decoration
        product(19, "Ceramic Table Lamp", "home-decoration", 140.0),
        product(20, "Woven Wall Hanging", "home-decoration", 95.0),
    ]
}

/// Only the laptop entries of the sample catalog.
pub fn sample_laptops() -> Vec<Product> {
    sample_products()
        .into_iter()
        .filter(|p| p.category == "laptops")
        .collect()
}
