//! Configuration file support
//!
//! A TOML file can supply every splitter setting. Values given on the
//! command line take precedence over the file.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Splitter configuration
    #[serde(default)]
    pub splitter: SplitterConfig,

    /// Resource locations
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Splitter settings; unset values fall back to the library defaults
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SplitterConfig {
    /// Language code
    pub language: Option<String>,

    /// Stopword and affix filtering
    pub stopwords: Option<bool>,

    /// Force-split mode (`off`, `penalize`, `exclude`)
    pub force_split: Option<String>,

    /// Minimum lexicon frequency
    pub min_freq: Option<u64>,

    /// Number of lexicon lines to read
    pub limit: Option<usize>,

    /// Ranking criteria in priority order
    pub ranking: Option<Vec<String>>,

    /// Cleaning passes in application order
    pub cleaning: Option<Vec<String>>,

    /// Maximum candidates enumerated per word
    pub max_candidates: Option<usize>,
}

/// Where resource files live
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Directory with `<code>.lexicon.tsv` and friends
    pub lexicon_dir: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Read a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
        Self::from_toml_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
