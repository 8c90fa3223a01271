//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two with the
/// same attribute values are the same value. To "change" one, build a new
/// one. `Money` and a topping placement are value objects; the cart is not
/// (it is the session's single mutable aggregate).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
