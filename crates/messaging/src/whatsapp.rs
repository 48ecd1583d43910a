//! WhatsApp deep links (`https://wa.me/<phone>?text=<message>`).

use romantica_products::Product;

use crate::format::{encode_component, format_price};

/// Shop contact number used when none is configured.
pub const DEFAULT_PHONE: &str = "94701234567";

/// Greeting for contact links that carry no product context.
pub const DEFAULT_GREETING: &str = "Hi! I'd like to know more about your products at Romantica.lk";

/// The shop's messaging contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppContact {
    phone: String,
}

impl Default for WhatsAppContact {
    fn default() -> Self {
        Self::new(DEFAULT_PHONE)
    }
}

impl WhatsAppContact {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Order link for a product. An absent or empty `message` uses
    /// [`order_message`].
    pub fn order_url(&self, product: &Product, message: Option<&str>) -> String {
        match message.filter(|m| !m.is_empty()) {
            Some(message) => self.link(message),
            None => self.link(&order_message(product)),
        }
    }

    /// Contact link with no product context; falls back to [`DEFAULT_GREETING`].
    pub fn general_url(&self, message: Option<&str>) -> String {
        self.link(message.filter(|m| !m.is_empty()).unwrap_or(DEFAULT_GREETING))
    }

    fn link(&self, message: &str) -> String {
        format!("https://wa.me/{}?text={}", self.phone, encode_component(message))
    }
}

/// Default order message used by product cards.
pub fn order_message(product: &Product) -> String {
    format!(
        "Hi! I'm interested in ordering \"{}\" (LKR {}). Could you please provide more details?",
        product.name(),
        format_price(product.price().amount())
    )
}

/// Order message used by the detail page, which carries a quantity.
pub fn order_message_with_quantity(product: &Product, quantity: u32) -> String {
    format!(
        "Hi! I'm interested in ordering \"{}\" (LKR {}) - Quantity: {}. Could you please provide more details?",
        product.name(),
        format_price(product.price().amount()),
        quantity
    )
}
