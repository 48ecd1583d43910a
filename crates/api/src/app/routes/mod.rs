use axum::{routing::get, Router};

pub mod admin;
pub mod catalog;
pub mod contact;
pub mod pages;
pub mod system;

/// Router for every storefront page and the raw catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/gifts", get(pages::gifts))
        .route("/pencil-arts", get(pages::pencil_arts))
        .route("/accessories", get(pages::accessories))
        .route("/product/:id", get(pages::product))
        .route("/product/:id/order", get(pages::order))
        .route("/contact", get(contact::contact))
        .route("/admin", get(admin::admin))
        .nest("/catalog", catalog::router())
}
