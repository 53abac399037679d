//! Splitter configuration
//!
//! Method names are resolved to [`RankingMethod`] and [`CleaningMethod`]
//! variants when the configuration is built, so nothing is looked up by
//! name while words are being split.

use std::fmt;
use std::str::FromStr;

use crate::clean::CleaningMethod;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::rank::RankingMethod;

/// Default configuration constants
pub mod defaults {
    use crate::clean::CleaningMethod;
    use crate::rank::RankingMethod;

    /// Lexicon entries below this count are ignored
    pub const MIN_FREQ: u64 = 2;

    /// Lexicon entries shorter than this (in characters) are noise
    pub const MIN_WORD_LEN: usize = 4;

    /// Ranking criteria in priority order
    pub const RANKINGS: [RankingMethod; 3] = [
        RankingMethod::AvgFrequency,
        RankingMethod::SemanticSimilarity,
        RankingMethod::Shortest,
    ];

    /// Cleaning passes in application order
    pub const CLEANINGS: [CleaningMethod; 4] = [
        CleaningMethod::General,
        CleaningMethod::LastParts,
        CleaningMethod::Suffix,
        CleaningMethod::Prefix,
    ];
}

/// How strongly decomposition is preferred over leaving a word whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceSplit {
    /// Rank one-part candidates like any other
    #[default]
    Off,
    /// Scale the frequency score of candidates with at most one lexical part
    Penalize,
    /// Drop one-part candidates whenever ranking
    Exclude,
}

impl ForceSplit {
    /// Divisor applied to the frequency score under [`ForceSplit::Penalize`]
    pub const PENALTY_DIVISOR: u128 = 10_000;

    /// Get the canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            ForceSplit::Off => "off",
            ForceSplit::Penalize => "penalize",
            ForceSplit::Exclude => "exclude",
        }
    }
}

impl FromStr for ForceSplit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "off" | "no" | "false" => Ok(ForceSplit::Off),
            "penalize" | "soft" => Ok(ForceSplit::Penalize),
            "exclude" | "yes" | "true" => Ok(ForceSplit::Exclude),
            other => Err(Error::Configuration(format!(
                "unknown force-split mode: {other}"
            ))),
        }
    }
}

impl fmt::Display for ForceSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) use_stopwords: bool,
    pub(crate) force_split: ForceSplit,
    pub(crate) min_freq: u64,
    pub(crate) limit: Option<usize>,
    pub(crate) rankings: Vec<RankingMethod>,
    pub(crate) cleanings: Vec<CleaningMethod>,
    pub(crate) max_candidates: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            use_stopwords: true,
            force_split: ForceSplit::Off,
            min_freq: defaults::MIN_FREQ,
            limit: None,
            rankings: defaults::RANKINGS.to_vec(),
            cleanings: defaults::CLEANINGS.to_vec(),
            max_candidates: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language whose profile and resources are used
    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether stopwords (and with them the affix filters) are applied
    pub fn use_stopwords(&self) -> bool {
        self.use_stopwords
    }

    /// Force-split mode
    pub fn force_split(&self) -> ForceSplit {
        self.force_split
    }

    /// Minimum lexicon frequency
    pub fn min_freq(&self) -> u64 {
        self.min_freq
    }

    /// Maximum number of lexicon lines read
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Ranking criteria in priority order
    pub fn rankings(&self) -> &[RankingMethod] {
        &self.rankings
    }

    /// Cleaning passes in application order
    pub fn cleanings(&self) -> &[CleaningMethod] {
        &self.cleanings
    }

    /// Cap on enumerated candidates per word
    pub fn max_candidates(&self) -> Option<usize> {
        self.max_candidates
    }

    /// Whether any ranking criterion consults the similarity space
    pub fn needs_similarity(&self) -> bool {
        self.rankings.contains(&RankingMethod::SemanticSimilarity)
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.rankings.is_empty() {
            return Err(Error::Configuration(
                "at least one ranking method is required".into(),
            ));
        }

        if self.max_candidates == Some(0) {
            return Err(Error::Configuration(
                "max_candidates must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    use_stopwords: Option<bool>,
    force_split: Option<ForceSplit>,
    min_freq: Option<u64>,
    limit: Option<usize>,
    rankings: Option<Vec<String>>,
    cleanings: Option<Vec<String>>,
    max_candidates: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Enable or disable stopword and affix filtering
    pub fn stopwords(mut self, enabled: bool) -> Self {
        self.use_stopwords = Some(enabled);
        self
    }

    /// Set the force-split mode
    pub fn force_split(mut self, mode: ForceSplit) -> Self {
        self.force_split = Some(mode);
        self
    }

    /// Set the minimum lexicon frequency
    pub fn min_freq(mut self, min_freq: u64) -> Self {
        self.min_freq = Some(min_freq);
        self
    }

    /// Only read the first `lines` entries of the lexicon
    pub fn limit(mut self, lines: Option<usize>) -> Self {
        self.limit = lines;
        self
    }

    /// Set the ranking criteria by name, in priority order
    pub fn ranking<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rankings = Some(names.into_iter().map(|s| s.as_ref().to_string()).collect());
        self
    }

    /// Set the cleaning passes by name, in application order
    pub fn cleaning<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.cleanings = Some(names.into_iter().map(|s| s.as_ref().to_string()).collect());
        self
    }

    /// Cap the number of enumerated candidates per word
    pub fn max_candidates(mut self, cap: Option<usize>) -> Self {
        self.max_candidates = cap;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(code) = self.language {
            config.language = code.parse()?;
        }

        if let Some(enabled) = self.use_stopwords {
            config.use_stopwords = enabled;
        }

        if let Some(mode) = self.force_split {
            config.force_split = mode;
        }

        if let Some(min_freq) = self.min_freq {
            config.min_freq = min_freq;
        }

        config.limit = self.limit;
        config.max_candidates = self.max_candidates;

        if let Some(names) = self.rankings {
            config.rankings = names
                .iter()
                .map(|name| name.trim().parse())
                .collect::<Result<_>>()?;
        }

        if let Some(names) = self.cleanings {
            config.cleanings = names
                .iter()
                .map(|name| name.trim().parse())
                .collect::<Result<_>>()?;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language(), Language::German);
        assert!(config.use_stopwords());
        assert_eq!(config.force_split(), ForceSplit::Off);
        assert_eq!(config.min_freq(), 2);
        assert_eq!(config.rankings(), defaults::RANKINGS);
        assert_eq!(config.cleanings(), defaults::CLEANINGS);
        assert!(config.needs_similarity());
    }

    #[test]
    fn test_builder_resolves_names() {
        let config = Config::builder()
            .language("sv")
            .ranking(["most_known", "longest"])
            .cleaning(["prefix", "general"])
            .force_split(ForceSplit::Exclude)
            .min_freq(5)
            .limit(Some(1000))
            .build()
            .unwrap();

        assert_eq!(config.language(), Language::Swedish);
        assert_eq!(
            config.rankings(),
            [RankingMethod::MostKnown, RankingMethod::Longest]
        );
        assert_eq!(
            config.cleanings(),
            [CleaningMethod::Prefix, CleaningMethod::General]
        );
        assert_eq!(config.force_split(), ForceSplit::Exclude);
        assert_eq!(config.min_freq(), 5);
        assert_eq!(config.limit(), Some(1000));
        assert!(!config.needs_similarity());
    }

    #[test]
    fn test_builder_rejects_unsupported_language() {
        let err = Config::builder().language("fr").build().unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage { .. }));
    }

    #[test]
    fn test_builder_rejects_unknown_methods() {
        let err = Config::builder().ranking(["loudest"]).build().unwrap_err();
        assert!(matches!(err, Error::UnknownRankingMethod(ref name) if name == "loudest"));

        let err = Config::builder().cleaning(["scrub"]).build().unwrap_err();
        assert!(matches!(err, Error::UnknownCleaningMethod(ref name) if name == "scrub"));
    }

    #[test]
    fn test_builder_rejects_empty_rankings() {
        let err = Config::builder()
            .ranking(Vec::<String>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_empty_cleaning_list_is_allowed() {
        let config = Config::builder()
            .cleaning(Vec::<String>::new())
            .build()
            .unwrap();
        assert!(config.cleanings().is_empty());
    }

    #[test]
    fn test_zero_candidate_cap_is_rejected() {
        let err = Config::builder()
            .max_candidates(Some(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_force_split_aliases() {
        assert_eq!("yes".parse::<ForceSplit>().unwrap(), ForceSplit::Exclude);
        assert_eq!("no".parse::<ForceSplit>().unwrap(), ForceSplit::Off);
        assert_eq!("soft".parse::<ForceSplit>().unwrap(), ForceSplit::Penalize);
        assert!("maybe".parse::<ForceSplit>().is_err());
    }
}
