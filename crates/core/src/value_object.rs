//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two prices of the same amount are the
//! same price; two page sizes of 16 are the same page size.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Price(2000) == Price(2000)`)
/// - **Entity**: has identity (two products with the same id are the same product,
///   even if one of them was loaded with a stale name)
///
/// Value objects are immutable. To "change" one, construct a new value, which
/// keeps the validation in a single constructor.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct PageSize(usize);
///
/// impl ValueObject for PageSize {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
