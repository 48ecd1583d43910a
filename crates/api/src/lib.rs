//! Storefront HTTP API: configuration, page composition, and routing.

pub mod app;
pub mod config;
pub mod middleware;

pub use config::{ConfigError, StorefrontConfig};
