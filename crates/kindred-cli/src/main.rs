//! Kindred CLI - Compute kinship labels for every pair of people in a family.

use clap::Parser;
use kindred_cli::commands;
use kindred_cli::input::load_family;
use kindred_cli::cli::PairsArgs;
use kindred_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> kindred_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let mut config = Config::load(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);
    let input = cli.input.as_deref();

    // No subcommand prints every pair, like `pairs` with no flags
    let command = cli
        .command
        .unwrap_or_else(|| Command::Pairs(PairsArgs::default()));

    match command {
        Command::Settings(args) => {
            commands::execute_settings(args, &mut config, &config_path, &formatter)?;
        }
        Command::Validate => {
            commands::execute_validate(input, &config.input, &formatter)?;
        }
        Command::Pairs(args) => {
            let family = load_family(input, &config.input)?;
            commands::execute_pairs(args, &family, &config.settings, &formatter)?;
        }
        Command::Relate(args) => {
            let family = load_family(input, &config.input)?;
            commands::execute_relate(args, &family, &formatter)?;
        }
        Command::People(args) => {
            let family = load_family(input, &config.input)?;
            commands::execute_people(args, &family, &formatter)?;
        }
    }

    Ok(())
}
