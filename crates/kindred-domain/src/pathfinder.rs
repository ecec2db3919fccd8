//! Ancestor path finder
//!
//! Finds the nearest common ancestor of two persons by climbing both
//! ancestor trees at the same time, one generation per round on each side.
//! The first round in which either climb touches the other one ends the
//! search, so the reported link is the shallowest reachable from both.

use crate::{Pedigree, Relationship};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

/// One side of the simultaneous ascent
struct Climb<K> {
    /// The person this side started from
    origin: K,
    /// Ancestors reached in the latest round
    frontier: Vec<K>,
    /// Ancestor -> generation at which this side first reached it
    visited: HashMap<K, i32>,
}

/// Where an expanded node touched the opposite side
struct Contact {
    /// Generations from the opposite origin to the contact point
    far: i32,
    half: bool,
}

impl<K: Copy + Eq + Hash> Climb<K> {
    fn new(origin: K) -> Self {
        Self {
            origin,
            frontier: vec![origin],
            visited: HashMap::new(),
        }
    }

    fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Move the frontier up one generation and return the nodes expanded
    fn advance<P: Pedigree<Key = K>>(&mut self, pedigree: &P, generation: i32) -> Vec<K> {
        let expanded = mem::take(&mut self.frontier);

        for &node in &expanded {
            for parent in pedigree.parents(node).into_iter().flatten() {
                if let Entry::Vacant(entry) = self.visited.entry(parent) {
                    entry.insert(generation);
                    self.frontier.push(parent);
                }
            }
        }

        expanded
    }

    /// Check whether the parents of `node` reach the opposite side
    ///
    /// The link is full when both parents are found at the same depth on the
    /// opposite side, whichever of its people led there. A double half
    /// relation (mother and father reached through two different children)
    /// is therefore reported as full.
    fn contact<P: Pedigree<Key = K>>(
        &self,
        pedigree: &P,
        node: K,
        other: &Climb<K>,
    ) -> Option<Contact> {
        let parents = pedigree.parents(node);

        if parents.contains(&Some(other.origin)) {
            return Some(Contact {
                far: 0,
                half: false,
            });
        }

        let [mother, father] =
            parents.map(|parent| parent.and_then(|key| other.visited.get(&key).copied()));
        match (mother, father) {
            (Some(m), Some(f)) => Some(Contact {
                far: m.min(f),
                half: m != f,
            }),
            (Some(depth), None) | (None, Some(depth)) => Some(Contact {
                far: depth,
                half: true,
            }),
            (None, None) => None,
        }
    }
}

/// Compute the relationship from `person1` to `person2`
///
/// Returns [`Relationship::SELF`] for the same person and
/// [`Relationship::UNRELATED`] when the two ancestor trees never meet.
///
/// The pedigree must be an acyclic forest; cycles are rejected when a
/// [`Family`](crate::Family) is built and are not detected here.
///
/// When one round produces several links, the one with the fewest total
/// generations wins, then a full link over a half one, then the smaller
/// `up` as seen from the smaller key. The result for `(b, a)` is always the
/// result for `(a, b)` reversed.
pub fn find_path<P: Pedigree>(pedigree: &P, person1: P::Key, person2: P::Key) -> Relationship {
    if person1 == person2 {
        return Relationship::SELF;
    }

    // Always climb from the smaller key so a swapped query breaks ties the same way
    if person2 < person1 {
        return climb_both(pedigree, person2, person1).reversed();
    }
    climb_both(pedigree, person1, person2)
}

fn climb_both<P: Pedigree>(pedigree: &P, person1: P::Key, person2: P::Key) -> Relationship {
    let mut first = Climb::new(person1);
    let mut second = Climb::new(person2);
    let mut generation = 0;

    while !(first.is_exhausted() && second.is_exhausted()) {
        generation += 1;

        let expanded_first = first.advance(pedigree, generation);
        let expanded_second = second.advance(pedigree, generation);

        let from_first = expanded_first
            .iter()
            .filter_map(|&node| first.contact(pedigree, node, &second))
            .map(|contact| Relationship {
                up: generation,
                down: contact.far,
                half: contact.half,
            });
        let from_second = expanded_second
            .iter()
            .filter_map(|&node| second.contact(pedigree, node, &first))
            .map(|contact| Relationship {
                up: contact.far,
                down: generation,
                half: contact.half,
            });

        if let Some(nearest) = from_first
            .chain(from_second)
            .min_by_key(|r| (r.up + r.down, r.half, r.up))
        {
            return nearest;
        }
    }

    Relationship::UNRELATED
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal pedigree over integer keys: index -> (mother, father)
    struct Links(Vec<(Option<usize>, Option<usize>)>);

    impl Pedigree for Links {
        type Key = usize;

        fn mother(&self, key: usize) -> Option<usize> {
            self.0[key].0
        }

        fn father(&self, key: usize) -> Option<usize> {
            self.0[key].1
        }
    }

    #[test]
    fn test_same_person() {
        let links = Links(vec![(None, None)]);
        assert_eq!(find_path(&links, 0, 0), Relationship::SELF);
    }

    #[test]
    fn test_no_parents_unrelated() {
        let links = Links(vec![(None, None), (None, None)]);
        assert_eq!(find_path(&links, 0, 1), Relationship::UNRELATED);
    }

    #[test]
    fn test_parent_and_child() {
        // 0 mother, 1 father, 2 child
        let links = Links(vec![(None, None), (None, None), (Some(0), Some(1))]);

        assert_eq!(find_path(&links, 2, 0), Relationship::new(1, 0));
        assert_eq!(find_path(&links, 0, 2), Relationship::new(0, 1));
        assert_eq!(find_path(&links, 0, 1), Relationship::UNRELATED);
    }

    #[test]
    fn test_full_and_half_siblings() {
        // 0 mother, 1 father, 2 second mother, 3 and 4 full siblings, 5 half sibling
        let links = Links(vec![
            (None, None),
            (None, None),
            (None, None),
            (Some(0), Some(1)),
            (Some(0), Some(1)),
            (Some(2), Some(1)),
        ]);

        assert_eq!(find_path(&links, 3, 4), Relationship::new(1, 1));
        assert_eq!(find_path(&links, 3, 5), Relationship::half(1, 1));
        assert_eq!(find_path(&links, 5, 4), Relationship::half(1, 1));
    }

    #[test]
    fn test_half_aunt_through_shared_father() {
        // 0 grandfather, 1 and 2 his two partners, 6 unrelated mother
        // 3 son of 1 and 0, 4 daughter of 2 and 0, 5 child of 6 and 3
        let links = Links(vec![
            (None, None),
            (None, None),
            (None, None),
            (Some(1), Some(0)),
            (Some(2), Some(0)),
            (Some(6), Some(3)),
            (None, None),
        ]);

        assert_eq!(find_path(&links, 5, 4), Relationship::half(2, 1));
        assert_eq!(find_path(&links, 4, 5), Relationship::half(1, 2));
    }

    #[test]
    fn test_unknown_fathers_make_half_links() {
        // 0 grandmother with children 1 and 2 (fathers unknown), 3 child of 2
        let links = Links(vec![
            (None, None),
            (Some(0), None),
            (Some(0), None),
            (Some(2), None),
        ]);

        assert_eq!(find_path(&links, 1, 3), Relationship::half(1, 2));
    }

    #[test]
    fn test_direct_link_beats_deeper_convergence() {
        // 0 grandfather, 1 father (son of 0), 2 child of 1
        let links = Links(vec![(None, None), (None, Some(0)), (None, Some(1))]);

        assert_eq!(find_path(&links, 2, 0), Relationship::new(2, 0));
        assert_eq!(find_path(&links, 0, 2), Relationship::new(0, 2));
    }

    #[test]
    fn test_crossed_lines_are_reversed_on_swap() {
        // 0 grandfather, 1 grandmother, 2 his son, 3 her daughter
        // 4 child of 1 and 2, 5 child of 3 and 0
        // 4 and 5 meet at the same distance through both 0 and 1
        let links = Links(vec![
            (None, None),
            (None, None),
            (None, Some(0)),
            (Some(1), None),
            (Some(1), Some(2)),
            (Some(3), Some(0)),
        ]);

        assert_eq!(find_path(&links, 4, 5), Relationship::half(1, 2));
        assert_eq!(find_path(&links, 5, 4), Relationship::half(2, 1));
    }

    #[test]
    fn test_full_link_beats_half_link() {
        // 0 and 1 parents of full sisters 5 and 6
        // 2 father of half brothers 7 (mother 3) and 8 (mother 4)
        // 9 child of 5 and 7, 10 child of 6 and 8
        let links = Links(vec![
            (None, None),
            (None, None),
            (None, None),
            (None, None),
            (None, None),
            (Some(0), Some(1)),
            (Some(0), Some(1)),
            (Some(3), Some(2)),
            (Some(4), Some(2)),
            (Some(5), Some(7)),
            (Some(6), Some(8)),
        ]);

        assert_eq!(find_path(&links, 9, 10), Relationship::new(2, 2));
        assert_eq!(find_path(&links, 10, 9), Relationship::new(2, 2));
    }

    #[test]
    fn test_double_half_counts_as_full() {
        // 0 mother and 1 father of 2; 3 her child and 4 his child by others
        // 5 child of 2, 6 child of 3 and 4
        let links = Links(vec![
            (None, None),
            (None, None),
            (Some(0), Some(1)),
            (Some(0), None),
            (None, Some(1)),
            (Some(2), None),
            (Some(3), Some(4)),
        ]);

        assert_eq!(find_path(&links, 5, 6), Relationship::new(2, 2));
        assert_eq!(find_path(&links, 6, 5), Relationship::new(2, 2));
    }
}
