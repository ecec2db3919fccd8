//! Settings command implementation.

use crate::cli::{SettingsAction, SettingsArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the settings command.
pub fn execute_settings(
    args: SettingsArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        SettingsAction::Show => print!("{}", config.to_toml()?),
        SettingsAction::Path => println!("{}", path.display()),
        SettingsAction::Reset => {
            reset_settings(config, path)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }
    Ok(())
}

/// Replace the configuration with defaults and save it.
fn reset_settings(config: &mut Config, path: &Path) -> Result<()> {
    *config = Config::default();
    config.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_reset_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.settings.skip_unrelated = true;

        reset_settings(&mut config, &path).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Tsv);

        let saved = Config::load(&path).unwrap();
        assert!(!saved.settings.skip_unrelated);
        assert_eq!(saved.settings.format, OutputFormat::Tsv);
    }
}
