//! Kindred CLI library.
//!
//! This library provides the core functionality for the Kindred command-line interface,
//! including CSV loading, configuration management, pair enumeration and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use enumerate::{enumerate_pairs, PairOptions, PairRow};
pub use error::{CliError, Result};
pub use output::Formatter;
