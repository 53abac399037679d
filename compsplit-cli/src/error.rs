//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Splitter could not be set up
    SplitterError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SplitterError(msg) => write!(f, "Splitter error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<compsplit_core::Error> for CliError {
    fn from(error: compsplit_core::Error) -> Self {
        use compsplit_core::Error;

        match error {
            Error::UnsupportedLanguage { .. }
            | Error::UnknownRankingMethod(_)
            | Error::UnknownCleaningMethod(_)
            | Error::Configuration(_) => CliError::ConfigError(error.to_string()),
            other => CliError::SplitterError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
