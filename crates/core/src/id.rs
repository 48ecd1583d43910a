//! Strongly-typed identifiers used across the domain.
//!
//! Product identifiers are positional: the n-th row of a loaded batch becomes
//! `product-<n>` (1-based). They are stable for one batch only; a source that
//! reorders its rows remaps identities.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const PRODUCT_ID_PREFIX: &str = "product-";

/// Identifier of a product within one loaded batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ProductId(u32);

impl ProductId {
    /// Build the identifier for a 1-based row position.
    ///
    /// Position 0 is not a valid row; it fails with [`DomainError::InvalidId`].
    pub fn from_position(position: u32) -> Result<Self, DomainError> {
        if position == 0 {
            return Err(DomainError::invalid_id("ProductId: position must be >= 1"));
        }
        Ok(Self(position))
    }

    /// Identifier for a 0-based slice index.
    pub fn from_index(index: usize) -> Result<Self, DomainError> {
        let position = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .ok_or_else(|| DomainError::invalid_id("ProductId: index out of range"))?;
        Self::from_position(position)
    }

    /// The 1-based row position this identifier was assigned from.
    pub fn position(&self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{PRODUCT_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(PRODUCT_ID_PREFIX)
            .ok_or_else(|| DomainError::invalid_id(format!("ProductId: missing prefix in {s:?}")))?;

        // `u32::from_str` accepts a leading '+', which never appears in a rendered id.
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!("ProductId: {s:?}")));
        }
        // Rendered ids are never zero-padded; `product-01` names no product.
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(DomainError::invalid_id(format!("ProductId: zero-padded {s:?}")));
        }

        let position = digits
            .parse::<u32>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Self::from_position(position)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ProductId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_positional_form() {
        let id = ProductId::from_position(7).unwrap();
        assert_eq!(id.to_string(), "product-7");
        assert_eq!(ProductId::from_index(0).unwrap().to_string(), "product-1");
    }

    #[test]
    fn rejects_position_zero() {
        assert!(matches!(
            ProductId::from_position(0),
            Err(DomainError::InvalidId(_))
        ));
        assert!("product-0".parse::<ProductId>().is_err());
    }

    #[test]
    fn parse_rejects_foreign_shapes() {
        let foreign = [
            "",
            "product-",
            "product-+3",
            "product-1a",
            "item-1",
            "PRODUCT-1",
            " product-1",
            "product-01",
            "product-0001",
            "product-00",
        ];
        for raw in foreign {
            assert!(raw.parse::<ProductId>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn serializes_as_string() {
        let id = ProductId::from_position(3).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"product-3\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ProductId>("\"nope\"").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: display then parse yields the same identifier.
            #[test]
            fn display_parse_is_identity(position in 1u32..=u32::MAX) {
                let id = ProductId::from_position(position).unwrap();
                let parsed: ProductId = id.to_string().parse().unwrap();
                prop_assert_eq!(parsed, id);
                prop_assert_eq!(parsed.position(), position);
            }
        }
    }
}
