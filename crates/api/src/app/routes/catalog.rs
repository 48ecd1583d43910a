//! Raw loader contract over HTTP, for clients that render their own pages.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto;
use crate::app::services::StorefrontServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(catalog_state))
        .route("/:category", get(products_by_category))
}

/// `{ products, loading, error }` for a freshly loaded catalog.
pub async fn catalog_state(
    Extension(services): Extension<Arc<StorefrontServices>>,
) -> axum::response::Response {
    let state = services.mount_catalog().settled().await;
    let status = if state.error().is_some() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };
    (status, Json(dto::catalog_state_to_json(&state))).into_response()
}

/// Products in one category label; unknown labels give an empty list.
pub async fn products_by_category(
    Extension(services): Extension<Arc<StorefrontServices>>,
    Path(category): Path<String>,
) -> axum::response::Response {
    let state = services.mount_catalog().settled().await;
    if state.error().is_some() {
        return (StatusCode::SERVICE_UNAVAILABLE, Json(dto::catalog_state_to_json(&state))).into_response();
    }
    (StatusCode::OK, Json(dto::products_to_json(&state.get_by_category(&category)))).into_response()
}
