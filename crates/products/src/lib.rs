//! Products domain module.
//!
//! This crate holds the catalog's data model: the external row schema exported
//! from the product sheet, the typed [`Product`] entity, and the deterministic
//! transformation between them (no IO, no async).

pub mod product;
pub mod raw;
pub mod transform;

pub use product::{Category, DEFAULT_FEATURES, Price, Product};
pub use raw::{RawField, RawRecord};
pub use transform::{is_available, transform_records};
