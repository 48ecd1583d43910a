//! `romantica-core` — storefront domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no async runtime).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
