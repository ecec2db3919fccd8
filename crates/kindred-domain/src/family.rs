//! Family module - the validated person registry

use crate::{
    find_path, FamilyError, Gender, Pedigree, Person, PersonId, PersonKey, PersonRecord,
    Relationship, Violation,
};
use std::collections::HashMap;
use std::ops::Index;

/// The complete set of persons plus an index by id
///
/// A `Family` can only be built through [`Family::from_records`], which
/// rejects duplicate ids, dangling parent references, gender-inconsistent
/// parent edges and cycles. Once built it is read-only, so relationship
/// queries can run concurrently from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Family {
    people: Vec<Person>,
    index: HashMap<PersonId, PersonKey>,
}

impl Family {
    /// Build and validate a family from input records
    ///
    /// # Errors
    /// - [`FamilyError::DuplicateId`] if two records share an id
    /// - [`FamilyError::UnknownParent`] if a parent id is not in `records`
    /// - [`FamilyError::InvalidPedigree`] listing every gender mismatch and
    ///   cycle found
    pub fn from_records(
        records: impl IntoIterator<Item = PersonRecord>,
    ) -> Result<Self, FamilyError> {
        let records: Vec<PersonRecord> = records.into_iter().collect();

        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index
                .insert(record.id.clone(), PersonKey::new(position))
                .is_some()
            {
                return Err(FamilyError::DuplicateId(record.id.clone()));
            }
        }

        let resolve = |person: &PersonId, parent: &Option<PersonId>| match parent {
            None => Ok(None),
            Some(id) => index
                .get(id)
                .copied()
                .map(Some)
                .ok_or_else(|| FamilyError::UnknownParent {
                    person: person.clone(),
                    parent: id.clone(),
                }),
        };

        let mut people = Vec::with_capacity(records.len());
        for record in &records {
            let mother = resolve(&record.id, &record.mother_id)?;
            let father = resolve(&record.id, &record.father_id)?;
            people.push(Person {
                id: record.id.clone(),
                first_name: record.first_name.clone(),
                last_name: record.last_name.clone(),
                gender: record.gender,
                mother,
                father,
            });
        }

        let family = Self { people, index };
        family.validate()?;
        Ok(family)
    }

    /// Check the pedigree invariants
    ///
    /// Mothers must be female, fathers male, and nobody may be their own
    /// ancestor. All violations are collected before returning.
    pub fn validate(&self) -> Result<(), FamilyError> {
        let mut violations = Vec::new();

        for person in &self.people {
            if let Some(mother) = person.mother.map(|key| &self[key]) {
                if mother.gender != Gender::Female {
                    violations.push(Violation::MotherNotFemale {
                        person: person.id.clone(),
                        mother: mother.id.clone(),
                    });
                }
            }
            if let Some(father) = person.father.map(|key| &self[key]) {
                if father.gender != Gender::Male {
                    violations.push(Violation::FatherNotMale {
                        person: person.id.clone(),
                        father: father.id.clone(),
                    });
                }
            }
        }

        violations.extend(
            self.find_cycles()
                .into_iter()
                .map(|key| Violation::Cycle {
                    person: self[key].id.clone(),
                }),
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(FamilyError::InvalidPedigree { violations })
        }
    }

    /// Whether the pedigree invariants hold
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Find persons that close a cycle along parent edges
    ///
    /// Iterative three-color depth-first search; each back edge reports the
    /// person it points to.
    fn find_cycles(&self) -> Vec<PersonKey> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        let mut marks = vec![Mark::New; self.people.len()];
        let mut cycles = Vec::new();

        for start in 0..self.people.len() {
            if marks[start] != Mark::New {
                continue;
            }

            marks[start] = Mark::Active;
            let mut stack = vec![(start, 0usize)];

            while let Some(top) = stack.last_mut() {
                let node = top.0;
                if top.1 >= 2 {
                    marks[node] = Mark::Done;
                    stack.pop();
                    continue;
                }

                let parent = self.people[node].parents()[top.1];
                top.1 += 1;

                if let Some(parent) = parent {
                    let parent = parent.index();
                    match marks[parent] {
                        Mark::New => {
                            marks[parent] = Mark::Active;
                            stack.push((parent, 0));
                        }
                        Mark::Active => cycles.push(PersonKey::new(parent)),
                        Mark::Done => {}
                    }
                }
            }
        }

        cycles
    }

    /// Get a person by key
    pub fn get(&self, key: PersonKey) -> Option<&Person> {
        self.people.get(key.index())
    }

    /// Get the key of a person by id
    pub fn key_of(&self, id: &str) -> Option<PersonKey> {
        self.index.get(&PersonId::new(id)).copied()
    }

    /// Get a person by id
    pub fn find(&self, id: &str) -> Option<&Person> {
        self.key_of(id).map(|key| &self[key])
    }

    /// Number of persons
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the family has no members
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate over persons in input order
    pub fn iter(&self) -> impl Iterator<Item = (PersonKey, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(position, person)| (PersonKey::new(position), person))
    }

    /// Iterate over keys in input order
    pub fn keys(&self) -> impl Iterator<Item = PersonKey> {
        (0..self.people.len()).map(PersonKey::new)
    }

    /// Compute the relationship from `person1` to `person2`
    pub fn relationship(&self, person1: PersonKey, person2: PersonKey) -> Relationship {
        find_path(self, person1, person2)
    }

    /// Label what `person2` is to `person1`, e.g. "aunt" or "half brother"
    pub fn kinship(&self, person1: PersonKey, person2: PersonKey) -> String {
        self.relationship(person1, person2)
            .label(Some(self[person2].gender))
    }
}

impl Person {
    fn parents(&self) -> [Option<PersonKey>; 2] {
        [self.mother, self.father]
    }
}

impl Index<PersonKey> for Family {
    type Output = Person;

    fn index(&self, key: PersonKey) -> &Person {
        &self.people[key.index()]
    }
}

impl Pedigree for Family {
    type Key = PersonKey;

    fn mother(&self, key: PersonKey) -> Option<PersonKey> {
        self.get(key).and_then(|person| person.mother)
    }

    fn father(&self, key: PersonKey) -> Option<PersonKey> {
        self.get(key).and_then(|person| person.father)
    }
}
