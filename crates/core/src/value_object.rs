//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value and swap it in. Filter criteria, price ranges and page
/// tokens are all value objects: two equal values are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct PriceRange { min: f64, max: f64 }
///
/// impl ValueObject for PriceRange {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
