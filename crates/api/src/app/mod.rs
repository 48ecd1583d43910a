//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: record source selection and per-page catalog mounting
//! - `views.rs`: page composition over a loaded catalog (pure, no HTTP)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::config::StorefrontConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &StorefrontConfig) -> Router {
    let services = Arc::new(services::build_services(config));
    build_app_with(services)
}

/// Build the router around already-wired services (tests inject sources here).
pub fn build_app_with(services: Arc<services::StorefrontServices>) -> Router {
    tracing::info!(source = %services.describe_source(), "storefront services ready");

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
