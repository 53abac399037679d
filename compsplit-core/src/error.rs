//! Error types for compound splitting
//!
//! Configuration and resource errors are fatal and surface before any word
//! is processed. Lookup misses during splitting never become errors; they
//! degrade to default scores instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring a splitter or loading its resources
#[derive(Error, Debug)]
pub enum Error {
    /// Language code outside the supported set
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that was requested
        code: String,
    },

    /// Ranking criterion name that does not resolve to a method
    #[error("unknown ranking method: {0}")]
    UnknownRankingMethod(String),

    /// Cleaning pass name that does not resolve to a method
    #[error("unknown cleaning method: {0}")]
    UnknownCleaningMethod(String),

    /// Invalid combination of configuration values
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A required resource is missing or unreadable
    #[error("resource {path}: {reason}")]
    Resource {
        /// The resource file path
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// A resource line could not be parsed
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// The resource file path (or a descriptive name for in-memory data)
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// I/O error outside a named resource
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn resource(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Resource {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for compound splitting operations
pub type Result<T> = std::result::Result<T, Error>;
