//! Order hand-off links.
//!
//! The storefront has no checkout: ordering opens a chat with the shop on an
//! external messaging service, pre-filled with a message about the product.
//! Everything here is pure string building; nothing touches the network.

pub mod format;
pub mod whatsapp;

pub use format::{encode_component, format_price};
pub use whatsapp::{DEFAULT_GREETING, DEFAULT_PHONE, WhatsAppContact};
