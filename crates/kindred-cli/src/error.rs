//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The family failed registry validation
    #[error("Invalid family: {0}")]
    Family(#[from] kindred_domain::FamilyError),

    /// Malformed input row
    #[error("Invalid input on line {line}: {message}")]
    InvalidRecord {
        /// 1-based line number in the input
        line: u64,
        /// What was wrong with the row
        message: String,
    },

    /// A person id given on the command line is not in the family
    #[error("Unknown person: {0}")]
    UnknownPerson(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
