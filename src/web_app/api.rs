// web_app/api.rs - Remote data source for the product catalog
//
// The catalog is read exactly once, at startup, from a fixed endpoint.
// There is no retry, no timeout and no polling; the caller decides what a
// failed fetch means for the UI.

use crate::web_app::model::{Product, ProductsResponse};

/// The fixed products endpoint. No query parameters, headers or auth.
pub const PRODUCTS_ENDPOINT: &str = "https://dummyjson.com/products";

/// Errors the catalog fetch can produce.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport failure, non-2xx status, or a body that does not
    /// deserialize into the expected envelope.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Fetch the full product collection.
///
/// On wasm32 this goes through the browser fetch API, so the returned
/// future is not `Send` and must be driven with `spawn_local`.
pub async fn fetch_products() -> Result<Vec<Product>, CatalogError> {
    tracing::debug!(endpoint = PRODUCTS_ENDPOINT, "fetching product catalog");

    let response = reqwest::get(PRODUCTS_ENDPOINT).await?.error_for_status()?;
    let body: ProductsResponse = response.json().await?;

    tracing::info!(count = body.products.len(), "product catalog loaded");
    Ok(body.products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_fixed_and_plain() {
        assert_eq!(PRODUCTS_ENDPOINT, "https://dummyjson.com/products");
        assert!(PRODUCTS_ENDPOINT.starts_with("https://"));
        // no query parameters are ever sent
        assert!(!PRODUCTS_ENDPOINT.contains('?'));
    }

    #[test]
    fn test_envelope_parses_realistic_payload() {
        let payload = r#"{
            "products": [
                {
                    "id": 1,
                    "title": "iPhone 9",
                    "description": "An apple mobile which is nothing like apple",
                    "price": 549,
                    "discountPercentage": 12.96,
                    "rating": 4.69,
                    "stock": 94,
                    "brand": "Apple",
                    "category": "smartphones",
                    "thumbnail": "https://cdn.dummyjson.com/1/thumbnail.jpg",
                    "images": ["https://cdn.dummyjson.com/1/1.jpg"]
                }
            ],
            "total": 100,
            "skip": 0,
            "limit": 30
        }"#;

        let envelope: ProductsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(envelope.products.len(), 1);

        let product = &envelope.products[0];
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "iPhone 9");
        assert_eq!(product.category, "smartphones");
        assert_eq!(product.price, 549.0);
    }

    #[test]
    fn test_envelope_rejects_missing_products_field() {
        let payload = r#"{"items": []}"#;
        assert!(serde_json::from_str::<ProductsResponse>(payload).is_err());
    }
}
