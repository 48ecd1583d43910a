use serde::Deserialize;

use romantica_catalog::CatalogState;
use romantica_products::Product;

// -------------------------
// Query DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub quantity: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub quantity: Option<u32>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub category: Option<String>,
    pub view: Option<String>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id_typed().to_string(),
        "name": product.name(),
        "category": product.category().as_str(),
        "price": product.price().amount(),
        "description": product.description(),
        "imageUrl": product.image_url(),
        "available": product.is_available(),
        "gallery": product.gallery(),
        "features": product.features(),
    })
}

/// The loader's output contract: `{ products, loading, error }`.
pub fn catalog_state_to_json(state: &CatalogState) -> serde_json::Value {
    serde_json::json!({
        "products": state.products().iter().map(product_to_json).collect::<Vec<_>>(),
        "loading": state.loading(),
        "error": state.error(),
        "loadedAt": state.loaded_at.map(|t| t.to_rfc3339()),
    })
}

pub fn products_to_json(products: &[Product]) -> serde_json::Value {
    serde_json::json!({
        "items": products.iter().map(product_to_json).collect::<Vec<_>>(),
    })
}
