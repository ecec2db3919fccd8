//! Validate command implementation.

use crate::config::InputSettings;
use crate::error::{CliError, Result};
use crate::input::{open_input, read_records};
use crate::output::Formatter;
use kindred_domain::{Family, FamilyError};
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Execute the validate command.
pub fn execute_validate(
    input: Option<&Path>,
    settings: &InputSettings,
    formatter: &Formatter,
) -> Result<()> {
    let (ok, lines) = check(open_input(input)?, settings, formatter)?;
    for line in &lines {
        println!("{}", line);
    }

    if ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "{} problem(s) found",
            lines.len()
        )))
    }
}

/// Validate the input and describe the outcome, one message per line.
fn check<R: Read>(
    reader: R,
    settings: &InputSettings,
    formatter: &Formatter,
) -> Result<(bool, Vec<String>)> {
    let records = read_records(reader, settings)?;

    match Family::from_records(records) {
        Ok(family) => Ok((
            true,
            vec![formatter.success(&format!("Family of {} people is valid", family.len()))],
        )),
        Err(FamilyError::InvalidPedigree { violations }) => {
            warn!("Found {} pedigree violation(s)", violations.len());
            Ok((
                false,
                violations
                    .iter()
                    .map(|v| formatter.error(&v.to_string()))
                    .collect(),
            ))
        }
        Err(other) => Ok((false, vec![formatter.error(&other.to_string())])),
    }
}
