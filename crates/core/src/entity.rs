//! Identity for domain objects whose state changes over time.

/// An object with a stable identity.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Whether `self` and `other` denote the same thing, whatever their current state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
