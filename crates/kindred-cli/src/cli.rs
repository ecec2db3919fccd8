//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kindred CLI - Name the kinship between members of a family.
#[derive(Debug, Parser)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Family CSV file (id, first, last, gender, mother id, father id); stdin if omitted
    #[arg(short, long, global = true, env = "KINDRED_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINDRED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Tab-separated rows (default)
    Tsv,
    /// Table format
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the relationship of every ordered pair of people
    Pairs(PairsArgs),

    /// Show the relationship between two people
    Relate(RelateArgs),

    /// Check the family for gender and cycle errors
    Validate,

    /// List the people in the family
    People(PeopleArgs),

    /// Inspect or reset the configuration file
    Settings(SettingsArgs),
}

/// Arguments for the pairs command.
#[derive(Debug, Default, Parser)]
pub struct PairsArgs {
    /// Leave out each person paired with themselves
    #[arg(long)]
    pub skip_self: bool,

    /// Leave out unrelated pairs
    #[arg(long)]
    pub skip_unrelated: bool,

    /// Compute on a single thread
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for the relate command.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    /// Id of the first person
    pub first: String,

    /// Id of the second person (the label describes this person)
    pub second: String,
}

/// Arguments for the people command.
#[derive(Debug, Parser)]
pub struct PeopleArgs {
    /// Only list people of this gender
    #[arg(short, long, value_enum)]
    pub gender: Option<GenderArg>,
}

/// Arguments for settings management.
#[derive(Debug, Parser)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Settings management actions.
#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration to the file
    Reset,
}

/// Gender argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum GenderArg {
    /// Male
    Male,
    /// Female
    Female,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Tsv => crate::config::OutputFormat::Tsv,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<GenderArg> for kindred_domain::Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => kindred_domain::Gender::Male,
            GenderArg::Female => kindred_domain::Gender::Female,
        }
    }
}
