//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every record held by the entity store implements this so collections can
/// locate, update and remove records by id without knowing their shape.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
