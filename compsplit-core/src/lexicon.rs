//! Read-only lexical knowledge base of one language
//!
//! A [`LexiconStore`] holds the word-frequency map together with the affix
//! sets and morpheme lists of a language. It is built once, then shared
//! across every word that is split.
//!
//! # Resource files
//!
//! [`LexiconStore::load`] reads the following files from a directory, where
//! `L` is the language code:
//!
//! | file               | format                         | read when            |
//! |--------------------|--------------------------------|----------------------|
//! | `L.lexicon.tsv`    | `word<whitespace>count` lines  | always               |
//! | `L.stopwords.txt`  | one entry per line             | stopwords enabled    |
//! | `L.suffixes.txt`   | one entry per line             | stopwords enabled    |
//! | `L.prefixes.txt`   | one entry per line             | stopwords enabled    |

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{defaults, Config};
use crate::error::{Error, Result};
use crate::language::{self, LanguageProfile};

/// Immutable per-language lexicon, affix sets and morpheme lists
#[derive(Debug, Clone)]
pub struct LexiconStore {
    code: String,
    words: HashMap<String, u64>,
    suffixes: HashSet<String>,
    prefixes: HashSet<String>,
    binding: Vec<String>,
    negative: Vec<String>,
}

impl LexiconStore {
    /// Start building a store in memory for the given morpheme profile
    pub fn builder(profile: &LanguageProfile) -> LexiconBuilder {
        LexiconBuilder::new(profile)
    }

    /// Load the resources of the configured language from `dir`
    pub fn load(dir: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let dir = dir.as_ref();
        let language = config.language();
        let profile = language::profile(language)?;
        let code = language.code();

        let mut builder = LexiconBuilder::new(&profile).min_freq(config.min_freq());

        let lexicon_path = dir.join(format!("{code}.lexicon.tsv"));
        log::info!("Loading {}", lexicon_path.display());
        builder = builder.read_frequencies(open(&lexicon_path)?, &lexicon_path, config.limit())?;

        if config.use_stopwords() {
            let stopwords = read_list(&dir.join(format!("{code}.stopwords.txt")))?;
            let suffixes = read_list(&dir.join(format!("{code}.suffixes.txt")))?;
            let prefixes = read_list(&dir.join(format!("{code}.prefixes.txt")))?;
            builder = builder
                .stopwords(stopwords)
                .suffixes(suffixes)
                .prefixes(prefixes);
        }

        let store = builder.build();
        log::info!(
            "Loaded {} lexicon entries for {} ({} suffixes, {} prefixes)",
            store.len(),
            language.name(),
            store.suffixes.len(),
            store.prefixes.len()
        );
        Ok(store)
    }

    /// Language code of the morpheme profile
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Frequency of a lexicon word
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// True if `word` is a lexicon entry
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// True if `part` is a binding morpheme
    pub fn is_binding(&self, part: &str) -> bool {
        self.binding.iter().any(|m| m == part)
    }

    /// Binding morphemes in profile order
    pub fn binding_morphemes(&self) -> &[String] {
        &self.binding
    }

    /// Negative morphemes in profile order
    pub fn negative_morphemes(&self) -> &[String] {
        &self.negative
    }

    /// True if appending some negative morpheme to `part` yields a word
    pub fn known_with_negative(&self, part: &str) -> bool {
        self.negative
            .iter()
            .any(|nm| self.contains(&format!("{part}{nm}")))
    }

    /// Disallowed word-final suffixes
    pub fn suffixes(&self) -> &HashSet<String> {
        &self.suffixes
    }

    /// True if `part` is a disallowed prefix
    pub fn is_prefix(&self, part: &str) -> bool {
        self.prefixes.contains(part)
    }

    /// Number of lexicon entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the lexicon holds no entries
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Builder that applies the lexicon admission rules
///
/// Entries shorter than four characters or below the minimum frequency are
/// dropped, words are lowercased and repeated entries accumulate. Stopwords
/// are removed when the store is built.
#[derive(Debug)]
pub struct LexiconBuilder {
    code: String,
    min_freq: u64,
    words: HashMap<String, u64>,
    stopwords: HashSet<String>,
    suffixes: HashSet<String>,
    prefixes: HashSet<String>,
    binding: Vec<String>,
    negative: Vec<String>,
}

impl LexiconBuilder {
    fn new(profile: &LanguageProfile) -> Self {
        Self {
            code: profile.code().to_string(),
            min_freq: 1,
            words: HashMap::new(),
            stopwords: HashSet::new(),
            suffixes: HashSet::new(),
            prefixes: HashSet::new(),
            binding: profile.binding().to_vec(),
            negative: profile.negative().to_vec(),
        }
    }

    /// Set the minimum frequency for entries added afterwards
    pub fn min_freq(mut self, min_freq: u64) -> Self {
        self.min_freq = min_freq;
        self
    }

    /// Add one lexicon entry, subject to the admission rules
    pub fn word(mut self, word: &str, count: u64) -> Self {
        self.insert(word, count);
        self
    }

    /// Add several lexicon entries
    pub fn words<'a>(mut self, entries: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        for (word, count) in entries {
            self.insert(word, count);
        }
        self
    }

    /// Words to remove from the lexicon
    pub fn stopwords<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Disallowed word-final suffixes
    pub fn suffixes<S: Into<String>>(mut self, suffixes: impl IntoIterator<Item = S>) -> Self {
        self.suffixes.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Disallowed prefixes
    pub fn prefixes<S: Into<String>>(mut self, prefixes: impl IntoIterator<Item = S>) -> Self {
        self.prefixes.extend(prefixes.into_iter().map(Into::into));
        self
    }

    /// Read a `word<whitespace>count` table, stopping after `limit` lines
    pub fn read_frequencies<R: BufRead>(
        mut self,
        reader: R,
        source: &Path,
        limit: Option<usize>,
    ) -> Result<Self> {
        for (index, line) in reader.lines().enumerate() {
            if limit.is_some_and(|limit| index >= limit) {
                break;
            }

            let line = line.map_err(|e| Error::resource(source, e))?;
            let mut fields = line.split_whitespace();
            let (word, count) = match (fields.next(), fields.next(), fields.next()) {
                (None, _, _) => continue,
                (Some(word), Some(count), None) => (word, count),
                _ => {
                    return Err(Error::parse(
                        source,
                        index + 1,
                        "expected `word<whitespace>count`",
                    ))
                }
            };
            let count: u64 = count
                .parse()
                .map_err(|e| Error::parse(source, index + 1, format!("bad count {count:?}: {e}")))?;

            self.insert(word, count);
        }

        Ok(self)
    }

    fn insert(&mut self, word: &str, count: u64) {
        if word.chars().count() < defaults::MIN_WORD_LEN {
            return;
        }
        if count == 0 || count < self.min_freq {
            return;
        }
        *self.words.entry(word.to_lowercase()).or_insert(0) += count;
    }

    /// Finish the store, removing stopwords from the lexicon
    pub fn build(mut self) -> LexiconStore {
        let before = self.words.len();
        self.words.retain(|word, _| !self.stopwords.contains(word));
        if before != self.words.len() {
            log::debug!("Removed {} stopwords from lexicon", before - self.words.len());
        }

        LexiconStore {
            code: self.code,
            words: self.words,
            suffixes: self.suffixes,
            prefixes: self.prefixes,
            binding: self.binding,
            negative: self.negative,
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::resource(path, e))
}

/// Read a one-entry-per-line list, skipping blank lines
pub(crate) fn read_list(path: &Path) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for line in open(path)?.lines() {
        let line = line.map_err(|e| Error::resource(path, e))?;
        let entry = line.trim();
        if !entry.is_empty() {
            entries.push(entry.to_string());
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn german() -> LanguageProfile {
        LanguageProfile::new("de", ["s", "en"], [])
    }

    #[test]
    fn test_admission_rules() {
        let store = LexiconStore::builder(&german())
            .min_freq(2)
            .words([("Haus", 80), ("tür", 10), ("kranken", 1), ("zeit", 3)])
            .build();

        assert_eq!(store.frequency("haus"), Some(80));
        assert!(!store.contains("tür"), "three letters is too short");
        assert!(!store.contains("kranken"), "below minimum frequency");
        assert_eq!(store.frequency("zeit"), Some(3));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_repeated_entries_accumulate() {
        let store = LexiconStore::builder(&german())
            .word("Haus", 5)
            .word("haus", 7)
            .build();
        assert_eq!(store.frequency("haus"), Some(12));
    }

    #[test]
    fn test_stopwords_removed_on_build() {
        let store = LexiconStore::builder(&german())
            .words([("haus", 80), ("aber", 900)])
            .stopwords(["aber"])
            .build();
        assert!(store.contains("haus"));
        assert!(!store.contains("aber"));
    }

    #[test]
    fn test_morpheme_queries() {
        let profile = LanguageProfile::new("xx", ["s"], ["e"]);
        let store = LexiconStore::builder(&profile)
            .word("schule", 10)
            .prefixes(["un"])
            .build();

        assert!(store.is_binding("s"));
        assert!(!store.is_binding("e"));
        assert!(store.known_with_negative("schul"));
        assert!(!store.known_with_negative("haus"));
        assert!(store.is_prefix("un"));
    }

    #[test]
    fn test_read_frequencies_with_limit() {
        let table = "haus\t80\nzeit 30\n\nkranken\t50\n";
        let store = LexiconStore::builder(&german())
            .read_frequencies(Cursor::new(table), Path::new("test.tsv"), Some(2))
            .unwrap()
            .build();

        assert!(store.contains("haus"));
        assert!(store.contains("zeit"));
        assert!(!store.contains("kranken"));
    }

    #[test]
    fn test_read_frequencies_rejects_malformed_line() {
        let table = "haus\t80\nzeit\n";
        let err = LexiconStore::builder(&german())
            .read_frequencies(Cursor::new(table), Path::new("test.tsv"), None)
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let table = "haus\tmany\n";
        let err = LexiconStore::builder(&german())
            .read_frequencies(Cursor::new(table), Path::new("test.tsv"), None)
            .unwrap_err();
        assert!(err.to_string().contains("bad count"));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.lexicon.tsv"), "haus\t80\naber\t900\nzeit\t1\n").unwrap();
        fs::write(dir.path().join("de.stopwords.txt"), "aber\n").unwrap();
        fs::write(dir.path().join("de.suffixes.txt"), "ung\n\n").unwrap();
        fs::write(dir.path().join("de.prefixes.txt"), "ver\n").unwrap();

        let store = LexiconStore::load(dir.path(), &Config::default()).unwrap();
        assert_eq!(store.code(), "de");
        assert!(store.contains("haus"));
        assert!(!store.contains("aber"));
        assert!(!store.contains("zeit"), "default minimum frequency is 2");
        assert!(store.suffixes().contains("ung"));
        assert_eq!(store.suffixes().len(), 1);
        assert!(store.is_prefix("ver"));
        assert!(store.is_binding("ens"));
    }

    #[test]
    fn test_load_without_stopwords_skips_affix_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("de.lexicon.tsv"), "aber\t900\n").unwrap();

        let config = Config::builder().stopwords(false).build().unwrap();
        let store = LexiconStore::load(dir.path(), &config).unwrap();
        assert!(store.contains("aber"));
        assert!(store.suffixes().is_empty());
    }

    #[test]
    fn test_load_missing_lexicon_is_resource_error() {
        let dir = TempDir::new().unwrap();
        let err = LexiconStore::load(dir.path(), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Resource { .. }));
    }
}
