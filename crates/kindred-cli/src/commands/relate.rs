//! Relate command implementation.

use crate::cli::RelateArgs;
use crate::enumerate::PairRow;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kindred_domain::Family;
use tracing::debug;

/// Execute the relate command.
pub fn execute_relate(args: RelateArgs, family: &Family, formatter: &Formatter) -> Result<()> {
    let row = relate(&args, family)?;
    println!("{}", formatter.format_pair(&row)?);
    Ok(())
}

fn relate(args: &RelateArgs, family: &Family) -> Result<PairRow> {
    let lookup = |id: &str| {
        family
            .key_of(id)
            .ok_or_else(|| CliError::UnknownPerson(id.to_string()))
    };
    let (first, second) = (lookup(&args.first)?, lookup(&args.second)?);

    let row = PairRow::compute(family, first, second);
    debug!(
        "{} -> {}: {} up, {} down, half={}",
        row.person_id, row.relative_id, row.up, row.down, row.half
    );
    Ok(row)
}
