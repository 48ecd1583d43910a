//! Sheet rows -> typed products.
//!
//! The transformation is all-or-nothing: one rejected row fails the batch and
//! no partial result is returned.

use romantica_core::{DomainError, DomainResult, ProductId};

use crate::product::{Category, Price, Product};
use crate::raw::{RawField, RawRecord};

/// Availability cell check: case-insensitive equality with `"yes"`, no trimming.
pub fn is_available(raw: &str) -> bool {
    raw.to_lowercase() == "yes"
}

/// Transform every row into a [`Product`], assigning positional ids.
///
/// Unavailable rows are kept here; filtering is the loader's concern.
pub fn transform_records(rows: &[RawRecord]) -> DomainResult<Vec<Product>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| transform_record(index, row))
        .collect()
}

fn transform_record(index: usize, row: &RawRecord) -> DomainResult<Product> {
    let id = ProductId::from_index(index)?;

    let name = row.get(RawField::ProductName);
    if name.trim().is_empty() {
        return Err(DomainError::validation(format!(
            "row {}: {:?} cannot be empty",
            index + 1,
            RawField::ProductName.header()
        )));
    }

    let category: Category = row.get(RawField::Category).parse().map_err(|e| {
        DomainError::validation(format!("row {}: {e}", index + 1))
    })?;

    let price = Price::parse(row.get(RawField::Price));
    if !price.is_valid() {
        tracing::warn!(
            product_id = %id,
            raw_price = row.get(RawField::Price),
            "price cell is not numeric; keeping NaN"
        );
    } else if price.amount() < 0.0 {
        return Err(DomainError::validation(format!(
            "row {}: price cannot be negative",
            index + 1
        )));
    }

    Ok(Product::new(
        id,
        name,
        category,
        price,
        row.get(RawField::Description),
        row.get(RawField::ImageUrl),
        is_available(row.get(RawField::Available)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use romantica_core::Entity;

    fn row(name: &str, category: &str, price: &str, available: &str) -> RawRecord {
        RawRecord::new(
            name,
            category,
            price,
            format!("{name} description"),
            format!("https://example.test/{}.jpeg", name.len()),
            available,
        )
    }

    #[test]
    fn availability_is_case_insensitive_yes() {
        for raw in ["Yes", "yes", "YES", "yEs"] {
            assert!(is_available(raw), "{raw:?}");
        }
        for raw in ["No", "", "y", "true", " yes", "yes "] {
            assert!(!is_available(raw), "{raw:?}");
        }
    }

    #[test]
    fn ids_are_positional_and_one_based() {
        let rows = vec![
            row("A", "gifts", "1", "Yes"),
            row("B", "pencil-arts", "2", "No"),
            row("C", "accessories", "3", "Yes"),
        ];
        let products = transform_records(&rows).unwrap();
        let ids: Vec<String> = products.iter().map(|p| p.id().to_string()).collect();
        assert_eq!(ids, vec!["product-1", "product-2", "product-3"]);
        assert!(!products[1].is_available());
    }

    #[test]
    fn maps_every_column() {
        let products = transform_records(&[row("Pearl Bracelet", "accessories", "1500", "Yes")]).unwrap();
        let p = &products[0];
        assert_eq!(p.name(), "Pearl Bracelet");
        assert_eq!(p.category(), Category::Accessories);
        assert_eq!(p.price().amount(), 1500.0);
        assert_eq!(p.description(), "Pearl Bracelet description");
        assert_eq!(p.image_url(), "https://example.test/14.jpeg");
        assert!(p.is_available());
    }

    #[test]
    fn malformed_price_is_kept_as_nan() {
        let products = transform_records(&[row("Sketch", "pencil-arts", "N/A", "Yes")]).unwrap();
        assert_eq!(products.len(), 1);
        assert!(products[0].price().amount().is_nan());
    }

    #[test]
    fn unknown_category_fails_whole_batch() {
        let rows = vec![row("A", "gifts", "1", "Yes"), row("B", "flowers", "2", "Yes")];
        let err = transform_records(&rows).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("row 2")));
    }

    #[test]
    fn blank_name_fails_whole_batch() {
        let rows = vec![row("  ", "gifts", "1", "Yes")];
        assert!(matches!(
            transform_records(&rows),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn negative_price_is_rejected() {
        let rows = vec![row("A", "gifts", "-10", "Yes")];
        assert!(transform_records(&rows).is_err());
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(transform_records(&[]).unwrap().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_row() -> impl Strategy<Value = RawRecord> {
            (
                "[A-Za-z][A-Za-z ]{0,30}",
                prop::sample::select(vec!["gifts", "pencil-arts", "accessories"]),
                0u32..100_000,
                prop::sample::select(vec!["Yes", "yes", "YES", "No", "no", "", "maybe"]),
            )
                .prop_map(|(name, category, price, available)| {
                    row(&name, category, &price.to_string(), available)
                })
        }

        proptest! {
            /// Property: availability follows the raw cell exactly.
            #[test]
            fn availability_matches_raw_cell(rows in prop::collection::vec(arb_row(), 0..20)) {
                let products = transform_records(&rows).unwrap();
                prop_assert_eq!(products.len(), rows.len());
                for (product, row) in products.iter().zip(&rows) {
                    prop_assert_eq!(product.is_available(), row.available.eq_ignore_ascii_case("yes"));
                }
            }

            /// Property: same input twice gives identical output.
            #[test]
            fn transform_is_deterministic(rows in prop::collection::vec(arb_row(), 0..20)) {
                prop_assert_eq!(transform_records(&rows).unwrap(), transform_records(&rows).unwrap());
            }
        }
    }
}
