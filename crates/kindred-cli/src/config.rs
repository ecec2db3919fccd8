//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// How input files are read
    #[serde(default)]
    pub input: InputSettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Leave out rows pairing a person with themselves
    #[serde(default)]
    pub skip_self: bool,

    /// Leave out rows for unrelated pairs
    #[serde(default)]
    pub skip_unrelated: bool,

    /// Worker threads for pair enumeration (0 = one per core)
    #[serde(default)]
    pub threads: usize,
}

/// Input file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSettings {
    /// Whether the first CSV row is a header
    #[serde(default)]
    pub has_headers: bool,

    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated rows
    Tsv,
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".kindred").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from file, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.check()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    fn check(&self) -> Result<()> {
        if !self.input.delimiter.is_ascii() {
            return Err(CliError::Config(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.input.delimiter
            )));
        }
        Ok(())
    }
}

impl InputSettings {
    /// The delimiter as a byte, as the CSV reader expects it.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| CliError::Config(format!("Invalid delimiter '{}'", self.delimiter)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Tsv,
            skip_self: false,
            skip_unrelated: false,
            threads: 0,
        }
    }
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            has_headers: false,
            delimiter: default_delimiter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Tsv
}

fn default_delimiter() -> char {
    ','
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Tsv);
        assert!(!config.settings.skip_self);
        assert!(!config.input.has_headers);
        assert_eq!(config.input.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [settings]
            format = "table"
            skip_unrelated = true
            threads = 4

            [input]
            has_headers = true
            delimiter = ";"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.settings.color);
        assert!(config.settings.skip_unrelated);
        assert_eq!(config.settings.threads, 4);
        assert!(config.input.has_headers);
        assert_eq!(config.input.delimiter_byte().unwrap(), b';');
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Tsv);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.settings.skip_self = true;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert!(loaded.settings.skip_self);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input]\ndelimiter = \"§\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
    }
}
