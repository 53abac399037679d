//! Embedded language profile loader
//!
//! Parses the shipped profiles on first access and caches them.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::language::{Language, LanguageProfile};

/// Embedded language profiles
static EMBEDDED: OnceLock<HashMap<Language, Arc<LanguageProfile>>> = OnceLock::new();

fn embedded_source(language: Language) -> &'static str {
    match language {
        Language::German => include_str!("../../configs/languages/german.toml"),
        Language::Swedish => include_str!("../../configs/languages/swedish.toml"),
        Language::Hungarian => include_str!("../../configs/languages/hungarian.toml"),
    }
}

/// Load the morpheme profile of a supported language
pub fn profile(language: Language) -> Result<Arc<LanguageProfile>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        for language in Language::ALL {
            match LanguageProfile::from_toml_str(embedded_source(language)) {
                Ok(profile) => {
                    map.insert(language, Arc::new(profile));
                }
                Err(e) => {
                    log::error!("Failed to load {} profile: {e}", language.name());
                }
            }
        }

        map
    });

    embedded
        .get(&language)
        .cloned()
        .ok_or_else(|| Error::Configuration(format!("No profile for {}", language.name())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_embedded_profiles_load() {
        for language in Language::ALL {
            let profile = profile(language).unwrap();
            assert_eq!(profile.code(), language.code());
            assert!(!profile.binding().is_empty());
        }
    }

    #[test]
    fn test_german_binding_morphemes() {
        let german = profile(Language::German).unwrap();
        assert_eq!(
            german.binding(),
            ["s", "e", "en", "nen", "ens", "es", "ns", "er", "n"]
        );
        assert!(german.negative().is_empty());
    }

    #[test]
    fn test_hungarian_profile_keeps_accents() {
        let hungarian = profile(Language::Hungarian).unwrap();
        assert!(hungarian.binding().iter().any(|m| m == "ítő"));
    }
}
