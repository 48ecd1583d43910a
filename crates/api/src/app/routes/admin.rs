use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
};

use crate::app::routes::pages::render;
use crate::app::services::StorefrontServices;
use crate::app::views::{self, ADMIN_FILTER_ALL, ViewMode};
use crate::app::{dto, errors};

/// Catalog overview: counts, category filter, grid/table listing.
pub async fn admin(
    Extension(services): Extension<Arc<StorefrontServices>>,
    Query(query): Query<dto::AdminQuery>,
) -> axum::response::Response {
    let view_mode = match query.view.as_deref() {
        None => ViewMode::default(),
        Some(raw) => match raw.parse::<ViewMode>() {
            Ok(mode) => mode,
            Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_view_mode", e),
        },
    };
    let filter = query.category.as_deref().unwrap_or(ADMIN_FILTER_ALL);

    let state = services.mount_catalog().settled().await;
    render(views::admin_page(&state, filter, view_mode, services.contact()))
}
