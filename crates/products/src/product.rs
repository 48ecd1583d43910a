use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use romantica_core::{DomainError, Entity, ProductId, ValueObject};

/// Feature bullets shown for products that carry none of their own.
pub const DEFAULT_FEATURES: [&str; 4] = [
    "Handcrafted with love",
    "Premium quality materials",
    "Perfect for gifting",
    "Carefully packaged",
];

/// Catalog category. Wire form is kebab-case (`pencil-arts`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Gifts,
    PencilArts,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Gifts, Category::PencilArts, Category::Accessories];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gifts => "gifts",
            Category::PencilArts => "pencil-arts",
            Category::Accessories => "accessories",
        }
    }

    /// Human label ("Pencil Arts").
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Gifts => "Gifts",
            Category::PencilArts => "Pencil Arts",
            Category::Accessories => "Accessories",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category {s:?}")))
    }
}

/// Product price in LKR.
///
/// A malformed source cell yields NaN rather than an error; callers that care
/// check [`Price::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Lenient decimal parse of a sheet cell.
    ///
    /// Leading whitespace is skipped and the longest numeric prefix wins, so
    /// `"12.5kg"` is 12.5. No numeric prefix at all gives NaN.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let candidate_len = s
            .bytes()
            .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
            .count();
        let candidate = &s[..candidate_len];

        (1..=candidate.len())
            .rev()
            .find_map(|end| candidate[..end].parse::<f64>().ok())
            .map(Self)
            .unwrap_or(Self(f64::NAN))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_nan()
    }
}

/// Catalog entity built from one sheet row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: Price,
    description: String,
    image_url: String,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    specifications: Option<BTreeMap<String, String>>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Price,
        description: impl Into<String>,
        image_url: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            description: description.into(),
            image_url: image_url.into(),
            available,
            gallery: None,
            features: None,
            specifications: None,
        }
    }

    pub fn with_gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = Some(gallery);
        self
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_specifications(mut self, specifications: BTreeMap<String, String>) -> Self {
        self.specifications = Some(specifications);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Gallery images; a product without its own gallery shows its main image.
    pub fn gallery(&self) -> Vec<&str> {
        match &self.gallery {
            Some(images) => images.iter().map(String::as_str).collect(),
            None => vec![self.image_url.as_str()],
        }
    }

    /// Feature bullets, falling back to [`DEFAULT_FEATURES`].
    pub fn features(&self) -> Vec<&str> {
        match &self.features {
            Some(features) => features.iter().map(String::as_str).collect(),
            None => DEFAULT_FEATURES.to_vec(),
        }
    }

    pub fn specifications(&self) -> Option<&BTreeMap<String, String>> {
        self.specifications.as_ref()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(
            ProductId::from_position(1).unwrap(),
            "Romantic Rose Bouquet",
            Category::Gifts,
            Price::new(2500.0),
            "Beautiful handcrafted rose bouquet",
            "https://example.test/rose.jpeg",
            true,
        )
    }

    #[test]
    fn price_parses_plain_decimal() {
        assert_eq!(Price::parse("2500").amount(), 2500.0);
        assert_eq!(Price::parse("  19.99").amount(), 19.99);
    }

    #[test]
    fn price_uses_longest_numeric_prefix() {
        assert_eq!(Price::parse("12.5kg").amount(), 12.5);
        assert_eq!(Price::parse("3e").amount(), 3.0);
        assert_eq!(Price::parse("1e3").amount(), 1000.0);
    }

    #[test]
    fn malformed_price_is_nan() {
        for raw in ["N/A", "", "   ", "LKR 2500", "-", "."] {
            let price = Price::parse(raw);
            assert!(price.amount().is_nan(), "{raw:?} should parse to NaN");
            assert!(!price.is_valid());
        }
    }

    #[test]
    fn category_round_trips_wire_form() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("Gifts".parse::<Category>().is_err());
        assert!("pencil arts".parse::<Category>().is_err());
        assert_eq!(Category::PencilArts.display_name(), "Pencil Arts");
    }

    #[test]
    fn gallery_falls_back_to_main_image() {
        let product = sample();
        assert_eq!(product.gallery(), vec!["https://example.test/rose.jpeg"]);

        let product = product.with_gallery(vec!["a.jpeg".into(), "b.jpeg".into()]);
        assert_eq!(product.gallery(), vec!["a.jpeg", "b.jpeg"]);
    }

    #[test]
    fn features_fall_back_to_defaults() {
        let product = sample();
        assert_eq!(product.features(), DEFAULT_FEATURES.to_vec());

        let product = product.with_features(vec!["Gift wrapped".into()]);
        assert_eq!(product.features(), vec!["Gift wrapped"]);
    }

    #[test]
    fn serializes_with_camel_case_contract() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "product-1");
        assert_eq!(json["category"], "gifts");
        assert_eq!(json["price"], 2500.0);
        assert_eq!(json["imageUrl"], "https://example.test/rose.jpeg");
        assert_eq!(json["available"], true);
        assert!(json.get("gallery").is_none());
    }
}
