//! Trait definitions for ancestry sources
//!
//! The path finder only needs to walk parent links, so it is written against
//! this trait rather than against [`Family`](crate::Family) directly.

use std::hash::Hash;

/// Read-only access to mother/father links of an acyclic ancestor forest
///
/// Implemented by [`Family`](crate::Family)
pub trait Pedigree {
    /// Handle identifying a person, ordered so queries can be normalized
    type Key: Copy + Ord + Hash;

    /// Get the mother of a person, if known
    fn mother(&self, key: Self::Key) -> Option<Self::Key>;

    /// Get the father of a person, if known
    fn father(&self, key: Self::Key) -> Option<Self::Key>;

    /// Get both parents as `[mother, father]`
    fn parents(&self, key: Self::Key) -> [Option<Self::Key>; 2] {
        [self.mother(key), self.father(key)]
    }
}
