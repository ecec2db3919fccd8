//! Kindred Domain Layer
//!
//! This crate contains the kinship core for Kindred: the person registry,
//! the ancestor path finder and the English kinship labeler. It performs no
//! I/O; loading records and printing results live in `kindred-cli`.
//!
//! ## Key Concepts
//!
//! - **Person**: an individual with at most one mother and one father
//! - **Family**: the validated, read-only registry of persons (an arena)
//! - **Relationship**: generations up to the nearest common ancestor and
//!   down to the second person, plus a half-relation flag
//! - **Label**: the English kinship term for a relationship
//!
//! ## Example
//!
//! ```
//! use kindred_domain::{Family, Gender, PersonRecord};
//!
//! let family = Family::from_records(vec![
//!     PersonRecord::new("1", "Abraham", "Simpson", Gender::Male),
//!     PersonRecord::new("2", "Homer", "Simpson", Gender::Male).with_father("1"),
//!     PersonRecord::new("3", "Bart", "Simpson", Gender::Male).with_father("2"),
//! ])
//! .unwrap();
//!
//! let bart = family.key_of("3").unwrap();
//! let abraham = family.key_of("1").unwrap();
//! let relationship = family.relationship(bart, abraham);
//!
//! assert_eq!((relationship.up, relationship.down), (2, 0));
//! assert_eq!(relationship.label(Some(Gender::Male)), "grandfather");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod family;
pub mod gender;
pub mod label;
pub mod pathfinder;
pub mod person;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use error::{FamilyError, Violation};
pub use family::Family;
pub use gender::Gender;
pub use label::{ordinal, BaseRelative};
pub use pathfinder::find_path;
pub use person::{Person, PersonId, PersonKey, PersonRecord};
pub use relationship::Relationship;
pub use traits::Pedigree;
