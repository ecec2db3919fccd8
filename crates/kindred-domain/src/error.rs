//! Registry construction errors

use crate::PersonId;
use std::fmt;
use thiserror::Error;

/// Errors that reject a family at construction time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FamilyError {
    /// Two records share the same id
    #[error("Duplicate person id: {0}")]
    DuplicateId(PersonId),

    /// A record references a parent id that is not in the family
    #[error("Person {person} references unknown parent {parent}")]
    UnknownParent {
        /// The referencing person
        person: PersonId,
        /// The missing parent id
        parent: PersonId,
    },

    /// Parent edges break the two-parent pedigree model
    #[error("Invalid pedigree: {}", join_violations(.violations))]
    InvalidPedigree {
        /// Every violation found, in record order
        violations: Vec<Violation>,
    },
}

/// A single pedigree invariant violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The referenced mother is not female
    MotherNotFemale {
        /// The child
        person: PersonId,
        /// The referenced mother
        mother: PersonId,
    },

    /// The referenced father is not male
    FatherNotMale {
        /// The child
        person: PersonId,
        /// The referenced father
        father: PersonId,
    },

    /// The person is reachable from themselves along parent edges
    Cycle {
        /// A person on the cycle
        person: PersonId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MotherNotFemale { person, mother } => {
                write!(f, "mother {} of {} is not female", mother, person)
            }
            Violation::FatherNotMale { person, father } => {
                write!(f, "father {} of {} is not male", father, person)
            }
            Violation::Cycle { person } => write!(f, "{} is their own ancestor", person),
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
