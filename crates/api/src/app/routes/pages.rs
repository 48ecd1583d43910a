use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Serialize;

use romantica_messaging::whatsapp;
use romantica_products::Category;

use crate::app::services::StorefrontServices;
use crate::app::views::{self, ProductLookup, View};
use crate::app::{dto, errors};

/// Ready pages are 200; a page still loading or failed is 503 with the view body.
pub(crate) fn render<T: Serialize>(view: View<T>) -> axum::response::Response {
    let status = match &view {
        View::Ready(_) => StatusCode::OK,
        View::Loading | View::Error { .. } => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(view)).into_response()
}

pub async fn home(
    Extension(services): Extension<Arc<StorefrontServices>>,
) -> axum::response::Response {
    let state = services.mount_catalog().settled().await;
    render(views::home_page(&state, services.contact()))
}

async fn category(services: Arc<StorefrontServices>, category: Category) -> axum::response::Response {
    let state = services.mount_catalog().settled().await;
    render(views::category_page(&state, category, services.contact()))
}

pub async fn gifts(
    Extension(services): Extension<Arc<StorefrontServices>>,
) -> axum::response::Response {
    category(services, Category::Gifts).await
}

pub async fn pencil_arts(
    Extension(services): Extension<Arc<StorefrontServices>>,
) -> axum::response::Response {
    category(services, Category::PencilArts).await
}

pub async fn accessories(
    Extension(services): Extension<Arc<StorefrontServices>>,
) -> axum::response::Response {
    category(services, Category::Accessories).await
}

pub async fn product(
    Extension(services): Extension<Arc<StorefrontServices>>,
    Path(id): Path<String>,
    Query(query): Query<dto::DetailQuery>,
) -> axum::response::Response {
    let state = services.mount_catalog().settled().await;
    let view = views::product_page(&state, &id, query.quantity.unwrap_or(1), services.contact());

    if matches!(view, View::Ready(ProductLookup::NotFound { .. })) {
        tracing::debug!(product_id = %id, "product not in loaded catalog");
        return (StatusCode::NOT_FOUND, Json(view)).into_response();
    }
    render(view)
}

/// Hand the order off to the shop's messaging contact.
pub async fn order(
    Extension(services): Extension<Arc<StorefrontServices>>,
    Path(id): Path<String>,
    Query(query): Query<dto::OrderQuery>,
) -> axum::response::Response {
    let state = services.mount_catalog().settled().await;
    if let Some(message) = state.error() {
        return errors::json_error(StatusCode::SERVICE_UNAVAILABLE, "load_failed", message);
    }

    // Unavailable rows never reach the resident collection, so they land here too.
    let Some(product) = state.find_by_id(&id) else {
        return errors::product_not_found(&id);
    };

    let message = match (query.message.filter(|m| !m.is_empty()), query.quantity) {
        (Some(message), _) => Some(message),
        (None, Some(quantity)) => Some(whatsapp::order_message_with_quantity(product, quantity.max(1))),
        (None, None) => None,
    };
    let url = services.contact().order_url(product, message.as_deref());

    tracing::info!(product_id = %product.id_typed(), "order handed off to messaging");
    Redirect::to(&url).into_response()
}
