//! Entity trait: identity that outlives any particular view of the record.

/// Entity marker + minimal interface.
///
/// Catalog records are compared and de-duplicated by identity, so anything
/// that lands in a catalog exposes its identifier through this trait.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
