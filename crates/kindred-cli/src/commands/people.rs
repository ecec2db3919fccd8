//! People command implementation.

use crate::cli::PeopleArgs;
use crate::error::Result;
use crate::output::{Formatter, PersonRow};
use kindred_domain::{Family, Gender};

/// Execute the people command.
pub fn execute_people(args: PeopleArgs, family: &Family, formatter: &Formatter) -> Result<()> {
    let rows = list_people(family, args.gender.map(Into::into));
    let output = formatter.format_people(&rows)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Describe people in input order, optionally of one gender only.
fn list_people(family: &Family, gender: Option<Gender>) -> Vec<PersonRow> {
    family
        .iter()
        .filter(|(_, person)| gender.map_or(true, |g| person.gender == g))
        .map(|(_, person)| PersonRow::new(family, person))
        .collect()
}
