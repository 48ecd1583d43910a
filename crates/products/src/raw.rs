//! External row schema (one row of the product sheet export).

use serde::{Deserialize, Serialize};

/// The fixed, ordered column set of the product sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawField {
    ProductName,
    Category,
    Price,
    Description,
    ImageUrl,
    Available,
}

impl RawField {
    /// Columns in sheet order.
    pub const ALL: [RawField; 6] = [
        RawField::ProductName,
        RawField::Category,
        RawField::Price,
        RawField::Description,
        RawField::ImageUrl,
        RawField::Available,
    ];

    /// Exact header text used by the sheet export.
    pub fn header(&self) -> &'static str {
        match self {
            RawField::ProductName => "Product Name",
            RawField::Category => "Category",
            RawField::Price => "Price",
            RawField::Description => "Description",
            RawField::ImageUrl => "Image URL",
            RawField::Available => "Available (Yes/No)",
        }
    }
}

/// One row as exported by the tabular source. Every cell is a string.
///
/// Serde names match the sheet headers, so a JSON export deserializes as-is;
/// a row missing any column is rejected at that boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Image URL")]
    pub image_url: String,
    #[serde(rename = "Available (Yes/No)")]
    pub available: String,
}

impl RawRecord {
    pub fn new(
        product_name: impl Into<String>,
        category: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        available: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            category: category.into(),
            price: price.into(),
            description: description.into(),
            image_url: image_url.into(),
            available: available.into(),
        }
    }

    /// Cell value for a column.
    pub fn get(&self, field: RawField) -> &str {
        match field {
            RawField::ProductName => &self.product_name,
            RawField::Category => &self.category,
            RawField::Price => &self.price,
            RawField::Description => &self.description,
            RawField::ImageUrl => &self.image_url,
            RawField::Available => &self.available,
        }
    }
}
