//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances with the same attributes are
/// interchangeable. In this workspace that covers amounts and credentials:
/// an `Amount { whole: 5, fraction: 0 }` is the same amount wherever it appears.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Amount { whole: i64, fraction: i64 }
///
/// impl ValueObject for Amount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
