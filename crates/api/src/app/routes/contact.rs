use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::{IntoResponse, Redirect},
};

use crate::app::dto;
use crate::app::services::StorefrontServices;

/// Generic contact link, no product context.
pub async fn contact(
    Extension(services): Extension<Arc<StorefrontServices>>,
    Query(query): Query<dto::ContactQuery>,
) -> axum::response::Response {
    let url = services.contact().general_url(query.message.as_deref());
    Redirect::to(&url).into_response()
}
