//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Parts and orders are entities: a part keeps its identity while its stock
/// changes, an order is known by its number.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
