//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two prices holding the same amount are the
/// same price. They are immutable once built; "changing" one means building a
/// new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
