//! Pairs command implementation.

use crate::cli::PairsArgs;
use crate::config::Settings;
use crate::enumerate::{enumerate_pairs, PairOptions};
use crate::error::Result;
use crate::output::Formatter;
use kindred_domain::Family;

/// Execute the pairs command.
pub fn execute_pairs(
    args: PairsArgs,
    family: &Family,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<()> {
    let output = render_pairs(&args, family, settings, formatter)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Build the pair options from flags and settings, then format every row.
fn render_pairs(
    args: &PairsArgs,
    family: &Family,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<String> {
    // Flags can only switch filters on; settings provide the defaults
    let options = PairOptions {
        skip_self: args.skip_self || settings.skip_self,
        skip_unrelated: args.skip_unrelated || settings.skip_unrelated,
        sequential: args.sequential,
        threads: settings.threads,
    };

    let rows = enumerate_pairs(family, &options)?;
    formatter.format_pairs(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use kindred_domain::{Gender, PersonRecord};

    #[test]
    fn test_settings_enable_filters() {
        let family = Family::from_records(vec![
            PersonRecord::new("1", "Homer", "Simpson", Gender::Male),
            PersonRecord::new("2", "Bart", "Simpson", Gender::Male)
                .with_father("1"),
            PersonRecord::new("3", "Ned", "Flanders", Gender::Male),
        ])
        .unwrap();
        let formatter = Formatter::new(OutputFormat::Tsv, false);
        let settings = Settings {
            skip_unrelated: true,
            ..Settings::default()
        };
        let args = PairsArgs {
            skip_self: true,
            ..PairsArgs::default()
        };

        let output = render_pairs(&args, &family, &settings, &formatter).unwrap();
        assert_eq!(
            output,
            "Homer Simpson\tBart Simpson\tson\nBart Simpson\tHomer Simpson\tfather"
        );
    }
}
