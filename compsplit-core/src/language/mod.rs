//! Supported languages and their morpheme profiles
//!
//! Each language ships an embedded TOML profile naming its binding
//! (linking) morphemes and its negative morphemes. Profiles are parsed once
//! and cached for the process lifetime.

pub(crate) mod config;
pub(crate) mod loader;

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

pub use config::LanguageProfile;
pub use loader::profile;

/// Languages with a shipped compound splitting profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// German
    #[default]
    German,
    /// Swedish
    Swedish,
    /// Hungarian
    Hungarian,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 3] = [Language::German, Language::Swedish, Language::Hungarian];

    /// Get the language code, also used to name resource files
    pub fn code(&self) -> &'static str {
        match self {
            Language::German => "de",
            Language::Swedish => "sv",
            Language::Hungarian => "hu",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::German => "German",
            Language::Swedish => "Swedish",
            Language::Hungarian => "Hungarian",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.to_lowercase().as_str() {
            "de" | "deu" | "german" => Ok(Language::German),
            "sv" | "swe" | "swedish" => Ok(Language::Swedish),
            "hu" | "hun" | "hungarian" => Ok(Language::Hungarian),
            _ => Err(Error::UnsupportedLanguage {
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
