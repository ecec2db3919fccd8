//! Relationship module - the path between two persons via their nearest common ancestor

use std::fmt;

/// A relationship between two family members
///
/// A relationship is defined by the position of the closest common ancestor
/// relative to both persons. You and your aunt are related through your
/// grandparents: two generations up from yourself, then one generation down.
/// "2 up, 1 down", or `(2, 1)`, identifies the aunt/uncle relationship.
///
/// Relationships are derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relationship {
    /// Generations from the first person up to the common ancestor
    pub up: i32,

    /// Generations from the common ancestor down to the second person
    pub down: i32,

    /// Whether the link runs through only one shared parent
    pub half: bool,
}

impl Relationship {
    /// A person compared with themselves
    pub const SELF: Self = Self::new(0, 0);

    /// No common ancestor exists
    pub const UNRELATED: Self = Self::new(-1, -1);

    /// Create a full (not half) relationship
    pub const fn new(up: i32, down: i32) -> Self {
        Self {
            up,
            down,
            half: false,
        }
    }

    /// Create a half relationship
    pub const fn half(up: i32, down: i32) -> Self {
        Self {
            up,
            down,
            half: true,
        }
    }

    /// Whether no common ancestor was found
    pub fn is_unrelated(&self) -> bool {
        self.up < 0 || self.down < 0
    }

    /// Whether both sides are the same person
    pub fn is_self(&self) -> bool {
        self.up == 0 && self.down == 0
    }

    /// The same relationship seen from the second person
    pub fn reversed(&self) -> Self {
        Self {
            up: self.down,
            down: self.up,
            half: self.half,
        }
    }

    /// Total number of generations walked, `None` when unrelated
    pub fn distance(&self) -> Option<u32> {
        if self.is_unrelated() {
            None
        } else {
            Some((self.up + self.down) as u32)
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unrelated() {
            return f.write_str("unrelated");
        }
        write!(f, "{} up, {} down", self.up, self.down)?;
        if self.half {
            f.write_str(" (half)")?;
        }
        Ok(())
    }
}
