//! Person module - individuals and their unresolved input records

use crate::Gender;
use std::fmt;

/// Opaque identity key of a person, unique within a family
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Create a new person id
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Arena index of a person inside one [`Family`](crate::Family)
///
/// Keys are only meaningful for the family that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonKey(usize);

impl PersonKey {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the arena index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A person in a validated family
///
/// Parent links are arena keys, so many children can share an ancestor
/// without shared ownership. Persons never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Gender
    pub gender: Gender,

    /// Mother, if known
    pub mother: Option<PersonKey>,

    /// Father, if known
    pub father: Option<PersonKey>,
}

impl Person {
    /// Get "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.gender)
    }
}

/// An input row describing a person, with parents referenced by id
///
/// Records are resolved into [`Person`]s by
/// [`Family::from_records`](crate::Family::from_records).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Unique identifier
    pub id: PersonId,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Gender
    pub gender: Gender,

    /// Mother's id, if known
    pub mother_id: Option<PersonId>,

    /// Father's id, if known
    pub father_id: Option<PersonId>,
}

impl PersonRecord {
    /// Create a record with no parents
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id: PersonId::new(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            mother_id: None,
            father_id: None,
        }
    }

    /// Set the mother's id
    pub fn with_mother(mut self, mother_id: impl Into<String>) -> Self {
        self.mother_id = Some(PersonId::new(mother_id));
        self
    }

    /// Set the father's id
    pub fn with_father(mut self, father_id: impl Into<String>) -> Self {
        self.father_id = Some(PersonId::new(father_id));
        self
    }

    /// Set both parents' ids
    pub fn with_parents(self, mother_id: impl Into<String>, father_id: impl Into<String>) -> Self {
        self.with_mother(mother_id).with_father(father_id)
    }
}
