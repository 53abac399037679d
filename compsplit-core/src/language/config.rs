//! TOML schema for language profiles

use serde::{Deserialize, Serialize};

/// Root of a language profile file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LanguageConfig {
    pub metadata: Metadata,
    pub morphemes: Morphemes,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Metadata {
    pub code: String,
    pub name: String,
}

/// Morpheme lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Morphemes {
    pub binding: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

impl LanguageConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if let Some(empty) = self
            .morphemes
            .binding
            .iter()
            .chain(&self.morphemes.negative)
            .find(|m| m.is_empty())
        {
            return Err(format!("Empty morpheme {empty:?} in {}", self.metadata.code));
        }

        Ok(())
    }
}

/// Binding and negative morphemes of one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    code: String,
    name: String,
    binding: Vec<String>,
    negative: Vec<String>,
}

impl LanguageProfile {
    /// Parse a profile from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        let config: LanguageConfig =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse profile: {e}"))?;
        config.validate()?;

        Ok(Self {
            code: config.metadata.code,
            name: config.metadata.name,
            binding: config.morphemes.binding,
            negative: config.morphemes.negative,
        })
    }

    /// Build a profile directly from morpheme lists
    pub fn new<S: Into<String>>(
        code: impl Into<String>,
        binding: impl IntoIterator<Item = S>,
        negative: impl IntoIterator<Item = S>,
    ) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            binding: binding.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Language code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable language name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binding morphemes in profile order
    pub fn binding(&self) -> &[String] {
        &self.binding
    }

    /// Negative morphemes in profile order
    pub fn negative(&self) -> &[String] {
        &self.negative
    }
}
