//! All-pairs relationship enumeration.
//!
//! Every pairwise query is independent and the family is read-only, so the
//! first person of each pair is fanned out over a rayon pool. Rows come back
//! in input order either way.

use crate::error::{CliError, Result};
use kindred_domain::{Family, PersonKey};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Which pairs to compute and how.
#[derive(Debug, Clone, Default)]
pub struct PairOptions {
    /// Leave out a person paired with themselves
    pub skip_self: bool,
    /// Leave out unrelated pairs
    pub skip_unrelated: bool,
    /// Run on the calling thread only
    pub sequential: bool,
    /// Worker threads (0 = rayon default)
    pub threads: usize,
}

/// One computed pair: what `relative` is to `person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairRow {
    /// Id of the first person
    pub person_id: String,
    /// Full name of the first person
    pub person: String,
    /// Id of the second person
    pub relative_id: String,
    /// Full name of the second person
    pub relative: String,
    /// Generations up from the first person
    pub up: i32,
    /// Generations down to the second person
    pub down: i32,
    /// Half relation
    pub half: bool,
    /// English kinship label
    pub label: String,
}

impl PairRow {
    /// Compute the row for one ordered pair.
    pub fn compute(family: &Family, person: PersonKey, relative: PersonKey) -> Self {
        let relationship = family.relationship(person, relative);
        let (first, second) = (&family[person], &family[relative]);

        Self {
            person_id: first.id.to_string(),
            person: first.full_name(),
            relative_id: second.id.to_string(),
            relative: second.full_name(),
            up: relationship.up,
            down: relationship.down,
            half: relationship.half,
            label: relationship.label(Some(second.gender)),
        }
    }
}

/// Compute every ordered pair of the family.
pub fn enumerate_pairs(family: &Family, options: &PairOptions) -> Result<Vec<PairRow>> {
    let keys: Vec<PersonKey> = family.keys().collect();
    info!(
        "Computing {} pair(s) for {} people",
        keys.len() * keys.len(),
        keys.len()
    );

    let rows_for = |person: PersonKey| -> Vec<PairRow> {
        keys.iter()
            .filter(|&&relative| !(options.skip_self && relative == person))
            .map(|&relative| PairRow::compute(family, person, relative))
            .filter(|row| !(options.skip_unrelated && row.up < 0))
            .collect()
    };

    let rows: Vec<PairRow> = if options.sequential {
        debug!("Enumerating pairs sequentially");
        keys.iter().flat_map(|&person| rows_for(person)).collect()
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()
            .map_err(|e| CliError::Config(format!("Failed to start worker pool: {}", e)))?;
        debug!("Enumerating pairs on {} thread(s)", pool.current_num_threads());

        let chunks: Vec<Vec<PairRow>> =
            pool.install(|| keys.par_iter().map(|&person| rows_for(person)).collect());
        chunks.into_iter().flatten().collect()
    };

    debug!("Produced {} row(s)", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_domain::{Gender, PersonRecord};

    fn family() -> Family {
        Family::from_records(vec![
            PersonRecord::new("1", "Homer", "Simpson", Gender::Male),
            PersonRecord::new("2", "Marge", "Bouvier", Gender::Female),
            PersonRecord::new("3", "Lisa", "Simpson", Gender::Female)
                .with_parents("2", "1"),
        ])
        .unwrap()
    }

    #[test]
    fn test_all_pairs_in_order() {
        let rows = enumerate_pairs(&family(), &PairOptions::default()).unwrap();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].label, "self");
        assert_eq!(rows[1].person, "Homer Simpson");
        assert_eq!(rows[1].relative, "Marge Bouvier");
        assert_eq!(rows[1].label, "unrelated");
        assert_eq!(rows[2].label, "daughter");
        assert_eq!(rows[6].label, "father");
    }

    #[test]
    fn test_skip_options() {
        let options = PairOptions {
            skip_self: true,
            skip_unrelated: true,
            ..PairOptions::default()
        };
        let rows = enumerate_pairs(&family(), &options).unwrap();

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["daughter", "daughter", "father", "mother"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let family = family();
        let parallel = enumerate_pairs(
            &family,
            &PairOptions {
                threads: 2,
                ..PairOptions::default()
            },
        )
        .unwrap();
        let sequential = enumerate_pairs(
            &family,
            &PairOptions {
                sequential: true,
                ..PairOptions::default()
            },
        )
        .unwrap();

        assert_eq!(parallel, sequential);
    }
}
