//! Raw record sources.
//!
//! A source hands back sheet rows exactly as exported; typing and validation
//! happen in `romantica_products::transform_records`.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use romantica_products::RawRecord;

use crate::error::SourceError;

/// Supplier of raw sheet rows.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

#[async_trait]
impl<S> RecordSource for Arc<S>
where
    S: RecordSource + ?Sized,
{
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        (**self).fetch().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Fixed in-memory rows.
#[derive(Debug, Clone)]
pub struct StaticRecordSource {
    rows: Vec<RawRecord>,
}

impl StaticRecordSource {
    pub fn from_rows(rows: Vec<RawRecord>) -> Self {
        Self { rows }
    }

    /// The storefront's built-in catalog (nine rows, all available).
    pub fn fixture() -> Self {
        Self::from_rows(fixture_rows())
    }

    pub fn rows(&self) -> &[RawRecord] {
        &self.rows
    }
}

impl Default for StaticRecordSource {
    fn default() -> Self {
        Self::fixture()
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("static({} rows)", self.rows.len())
    }
}

#[derive(Debug, Clone)]
enum JsonPayload {
    Inline(String),
    File(PathBuf),
}

/// Rows from a JSON array export of the product sheet.
///
/// Each element is an object keyed by the sheet headers. A file-backed source
/// re-reads the file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonRecordSource {
    payload: JsonPayload,
}

impl JsonRecordSource {
    pub fn from_json(payload: impl Into<String>) -> Self {
        Self {
            payload: JsonPayload::Inline(payload.into()),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            payload: JsonPayload::File(path.into()),
        }
    }

    fn parse(payload: &str) -> Result<Vec<RawRecord>, SourceError> {
        serde_json::from_str(payload).map_err(|e| SourceError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl RecordSource for JsonRecordSource {
    async fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        match &self.payload {
            JsonPayload::Inline(payload) => Self::parse(payload),
            JsonPayload::File(path) => {
                let payload = tokio::fs::read_to_string(path).await.map_err(|e| {
                    SourceError::Unavailable(format!("{}: {e}", path.display()))
                })?;
                Self::parse(&payload)
            }
        }
    }

    fn describe(&self) -> String {
        match &self.payload {
            JsonPayload::Inline(_) => "json(inline)".to_string(),
            JsonPayload::File(path) => format!("json({})", path.display()),
        }
    }
}

fn fixture_rows() -> Vec<RawRecord> {
    const PHOTOS: &str = "https://images.pexels.com/photos";

    vec![
        RawRecord::new(
            "Romantic Rose Bouquet",
            "gifts",
            "2500",
            "Beautiful handcrafted rose bouquet perfect for special occasions",
            format!("{PHOTOS}/1070850/pexels-photo-1070850.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Custom Portrait Drawing",
            "pencil-arts",
            "3500",
            "Personalized pencil portrait from your favorite photo",
            format!("{PHOTOS}/1269968/pexels-photo-1269968.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Pearl Bracelet",
            "accessories",
            "1500",
            "Elegant handmade pearl bracelet with gold accents",
            format!("{PHOTOS}/1454166/pexels-photo-1454166.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Love Letter Gift Box",
            "gifts",
            "2000",
            "Curated gift box with romantic items and handwritten note",
            format!("{PHOTOS}/264896/pexels-photo-264896.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Couple Portrait Sketch",
            "pencil-arts",
            "4500",
            "Beautiful couple portrait in pencil art style",
            format!("{PHOTOS}/1545743/pexels-photo-1545743.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Golden Heart Necklace",
            "accessories",
            "1800",
            "Delicate golden heart necklace, perfect for gifting",
            format!("{PHOTOS}/1191531/pexels-photo-1191531.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Anniversary Gift Set",
            "gifts",
            "3200",
            "Complete anniversary package with flowers, chocolates, and personalized card",
            format!("{PHOTOS}/1666065/pexels-photo-1666065.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Pet Portrait Drawing",
            "pencil-arts",
            "2800",
            "Custom pencil portrait of your beloved pet",
            format!("{PHOTOS}/1108099/pexels-photo-1108099.jpeg"),
            "Yes",
        ),
        RawRecord::new(
            "Rose Gold Earrings",
            "accessories",
            "2200",
            "Elegant rose gold earrings with crystal accents",
            format!("{PHOTOS}/1454166/pexels-photo-1454166.jpeg"),
            "Yes",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_has_nine_available_rows() {
        let rows = StaticRecordSource::fixture().fetch().await.unwrap();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| r.available == "Yes"));
        assert_eq!(rows[0].product_name, "Romantic Rose Bouquet");
    }

    #[tokio::test]
    async fn json_source_reads_sheet_export() {
        let source = JsonRecordSource::from_json(
            r#"[{"Product Name":"Pearl Bracelet","Category":"accessories","Price":"1500",
                 "Description":"d","Image URL":"https://example.test/p.jpeg",
                 "Available (Yes/No)":"No"}]"#,
        );
        let rows = source.fetch().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].available, "No");
    }

    #[tokio::test]
    async fn json_source_rejects_rows_missing_columns() {
        let source = JsonRecordSource::from_json(r#"[{"Product Name":"Pearl Bracelet"}]"#);
        assert!(matches!(source.fetch().await, Err(SourceError::Malformed(_))));
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let source = JsonRecordSource::from_file("/definitely/not/here/products.json");
        assert!(matches!(source.fetch().await, Err(SourceError::Unavailable(_))));
    }
}
