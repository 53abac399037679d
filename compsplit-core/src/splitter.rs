//! Compound splitter facade
//!
//! Ties the pipeline together: enumerate → clean → rank → format. The
//! lexicon and similarity space are shared read-only, so one splitter can
//! serve any number of threads.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use crate::clean::Cleaner;
use crate::config::Config;
use crate::enumerate::SegmentEnumerator;
use crate::error::Result;
use crate::format::Formatter;
use crate::lexicon::LexiconStore;
use crate::rank::{RankedCandidate, Ranker};
use crate::segmentation::Segmentation;
use crate::similarity::{EmbeddingSpace, SimilarityOracle};

/// Splits compound words into their parts
#[derive(Clone)]
pub struct Splitter {
    store: Arc<LexiconStore>,
    oracle: Option<Arc<dyn SimilarityOracle>>,
    config: Config,
}

impl std::fmt::Debug for Splitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Splitter")
            .field("language", &self.config.language())
            .field("lexicon_size", &self.store.len())
            .field("oracle", &self.oracle.is_some())
            .finish()
    }
}

impl Splitter {
    /// Create a splitter over an already built lexicon
    pub fn new(store: Arc<LexiconStore>, config: Config) -> Self {
        Self {
            store,
            oracle: None,
            config,
        }
    }

    /// Attach a similarity oracle
    pub fn with_oracle(mut self, oracle: Arc<dyn SimilarityOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Load the configured language's resources from `dir`
    ///
    /// The similarity space (`<code>.vectors.txt`) is only read when a
    /// ranking criterion needs it. If it is missing, similarity scores are
    /// zero and a warning is logged.
    pub fn from_dir(dir: impl AsRef<Path>, config: Config) -> Result<Self> {
        let dir = dir.as_ref();
        let store = LexiconStore::load(dir, &config)?;
        let mut splitter = Self::new(Arc::new(store), config);

        if splitter.config.needs_similarity() {
            let path = dir.join(format!("{}.vectors.txt", splitter.config.language().code()));
            if path.is_file() {
                splitter = splitter.with_oracle(Arc::new(EmbeddingSpace::load(&path)?));
            } else {
                log::warn!(
                    "No similarity space at {}; semantic similarity scores will be 0",
                    path.display()
                );
            }
        }

        Ok(splitter)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the lexicon
    pub fn store(&self) -> &LexiconStore {
        &self.store
    }

    /// True if a similarity oracle is attached
    pub fn has_oracle(&self) -> bool {
        self.oracle.is_some()
    }

    fn ranker(&self) -> Ranker<'_> {
        Ranker::new(&self.store, self.config.rankings())
            .with_oracle(self.oracle.as_deref())
            .with_force_split(self.config.force_split())
    }

    /// Enumerate and clean the candidates for a word
    pub fn candidates(&self, word: &str) -> BTreeSet<Segmentation> {
        let word = word.to_lowercase();
        let splits = SegmentEnumerator::new(&self.store).enumerate(&word);
        let cleaner = Cleaner::new(&self.store, self.config.cleanings());

        match self.config.max_candidates() {
            Some(cap) => cleaner.clean(splits.take(cap)),
            None => cleaner.clean(splits),
        }
    }

    /// All surviving candidates with their scores, best first
    pub fn ranked(&self, word: &str) -> Vec<RankedCandidate> {
        self.ranker().rank(self.candidates(word))
    }

    /// Split a word into its best segmentation
    ///
    /// The word is lowercased first. If no candidate survives cleaning the
    /// lowercased word is returned as a single part.
    pub fn split(&self, word: &str) -> Segmentation {
        let lowered = word.to_lowercase();
        log::debug!("Splitting {lowered}");

        let candidates = self.candidates(&lowered);
        log::debug!("{} candidates after cleaning", candidates.len());

        let best = self.ranker().best(candidates, &lowered);
        log::debug!("Best: {best}");
        best
    }

    /// Render a segmentation, marking binding morphemes with `|`
    pub fn format(&self, segmentation: &Segmentation) -> String {
        Formatter::new(&self.store).format(segmentation)
    }

    /// Split a word and render the result
    pub fn split_formatted(&self, word: &str) -> String {
        self.format(&self.split(word))
    }

    /// Split many words, preserving input order
    #[cfg(feature = "parallel")]
    pub fn split_batch<S>(&self, words: &[S]) -> Vec<Segmentation>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        words.par_iter().map(|word| self.split(word.as_ref())).collect()
    }

    /// Split many words, preserving input order
    #[cfg(not(feature = "parallel"))]
    pub fn split_batch<S>(&self, words: &[S]) -> Vec<Segmentation>
    where
        S: AsRef<str>,
    {
        words.iter().map(|word| self.split(word.as_ref())).collect()
    }
}
