//! Multi-criterion ranking of cleaned candidates
//!
//! Each candidate gets one score per configured [`RankingMethod`], in
//! priority order. Candidates are compared lexicographically on that score
//! tuple, and finally on their parts, so the winner is always unique.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::config::ForceSplit;
use crate::error::Error;
use crate::lexicon::LexiconStore;
use crate::segmentation::Segmentation;
use crate::similarity::SimilarityOracle;

/// Parts are truncated to this many characters before similarity lookup
pub const SIMILARITY_PREFIX_LEN: usize = 6;

/// A single ranking criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingMethod {
    /// Product of the frequencies of all lexical parts
    AvgFrequency,
    /// Mean similarity of adjacent lexical parts
    SemanticSimilarity,
    /// Fraction of lexical parts found in the lexicon
    MostKnown,
    /// Prefer more parts
    Longest,
    /// Prefer fewer parts
    Shortest,
}

impl RankingMethod {
    /// All ranking methods
    pub const ALL: [RankingMethod; 5] = [
        RankingMethod::AvgFrequency,
        RankingMethod::SemanticSimilarity,
        RankingMethod::MostKnown,
        RankingMethod::Longest,
        RankingMethod::Shortest,
    ];

    /// Name used on the command line and in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            RankingMethod::AvgFrequency => "avg_frequency",
            RankingMethod::SemanticSimilarity => "semantic_similarity",
            RankingMethod::MostKnown => "most_known",
            RankingMethod::Longest => "longest",
            RankingMethod::Shortest => "shortest",
        }
    }
}

impl FromStr for RankingMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        RankingMethod::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| Error::UnknownRankingMethod(name.to_string()))
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One criterion's score
///
/// Frequency products are kept as exact integers so large products never
/// tie through rounding. Products beyond `u128` saturate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Frequency product, scaled by [`ForceSplit::PENALTY_DIVISOR`]
    Count(u128),
    /// Ratio, similarity or part count
    Real(f64),
}

impl Score {
    /// The score as a float, frequency products unscaled
    pub fn value(&self) -> f64 {
        match *self {
            Score::Count(scaled) => scaled as f64 / ForceSplit::PENALTY_DIVISOR as f64,
            Score::Real(value) => value,
        }
    }

    fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Score::Count(a), Score::Count(b)) => a.cmp(b),
            _ => self.value().total_cmp(&other.value()),
        }
    }
}

/// A candidate with its score tuple
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    /// One score per ranking method, in priority order
    pub scores: Vec<Score>,
    /// The scored candidate
    pub segmentation: Segmentation,
}

impl Ord for RankedCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scores
            .iter()
            .zip(&other.scores)
            .map(|(a, b)| a.total_cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.segmentation.cmp(&other.segmentation))
    }
}

impl PartialOrd for RankedCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedCandidate {}

/// Scores candidates and selects the best one
#[derive(Clone, Copy)]
pub struct Ranker<'a> {
    store: &'a LexiconStore,
    oracle: Option<&'a dyn SimilarityOracle>,
    methods: &'a [RankingMethod],
    force_split: ForceSplit,
}

impl fmt::Debug for Ranker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ranker")
            .field("methods", &self.methods)
            .field("force_split", &self.force_split)
            .field("oracle", &self.oracle.is_some())
            .finish()
    }
}

impl<'a> Ranker<'a> {
    /// Create a ranker applying `methods` in priority order
    pub fn new(store: &'a LexiconStore, methods: &'a [RankingMethod]) -> Self {
        Self {
            store,
            oracle: None,
            methods,
            force_split: ForceSplit::Off,
        }
    }

    /// Use a similarity oracle for [`RankingMethod::SemanticSimilarity`]
    pub fn with_oracle(mut self, oracle: Option<&'a dyn SimilarityOracle>) -> Self {
        self.oracle = oracle;
        self
    }

    /// Set the force-split mode
    pub fn with_force_split(mut self, force_split: ForceSplit) -> Self {
        self.force_split = force_split;
        self
    }

    /// Score one candidate under one method
    pub fn score(&self, method: RankingMethod, candidate: &Segmentation) -> f64 {
        self.exact_score(method, candidate).value()
    }

    /// Score one candidate under one method, as compared when ranking
    pub fn exact_score(&self, method: RankingMethod, candidate: &Segmentation) -> Score {
        let score = match method {
            RankingMethod::AvgFrequency => return Score::Count(self.frequency_product(candidate)),
            RankingMethod::SemanticSimilarity => self.coherence(candidate),
            RankingMethod::MostKnown => self.known_ratio(candidate),
            RankingMethod::Longest => candidate.len() as f64,
            RankingMethod::Shortest => -(candidate.len() as f64),
        };
        // -0.0 would sort below 0.0 under a total order
        Score::Real(score + 0.0)
    }

    /// Score one candidate under every configured method
    pub fn score_all(&self, candidate: Segmentation) -> RankedCandidate {
        RankedCandidate {
            scores: self
                .methods
                .iter()
                .map(|&method| self.exact_score(method, &candidate))
                .collect(),
            segmentation: candidate,
        }
    }

    /// Score all candidates and sort them best first
    ///
    /// Under [`ForceSplit::Exclude`] candidates with fewer than two lexical
    /// parts are left out.
    pub fn rank<I>(&self, candidates: I) -> Vec<RankedCandidate>
    where
        I: IntoIterator<Item = Segmentation>,
    {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .filter(|candidate| {
                self.force_split != ForceSplit::Exclude || self.lexical_parts(candidate).len() > 1
            })
            .map(|candidate| self.score_all(candidate))
            .collect();
        ranked.sort_by(|a, b| b.cmp(a));
        ranked
    }

    /// Select the best candidate, falling back to the unsplit word
    pub fn best<I>(&self, candidates: I, word: &str) -> Segmentation
    where
        I: IntoIterator<Item = Segmentation>,
    {
        let ranked = self.rank(candidates);
        if log::log_enabled!(log::Level::Trace) {
            for entry in &ranked {
                log::trace!("  {:?} {}", entry.scores, entry.segmentation);
            }
        }

        ranked
            .into_iter()
            .next()
            .map(|entry| entry.segmentation)
            .unwrap_or_else(|| Segmentation::whole(word))
    }

    fn lexical_parts<'c>(&self, candidate: &'c Segmentation) -> Vec<&'c str> {
        candidate
            .parts()
            .iter()
            .map(String::as_str)
            .filter(|part| !self.store.is_binding(part))
            .collect()
    }

    /// Frequency product in units of `1 / PENALTY_DIVISOR`
    fn frequency_product(&self, candidate: &Segmentation) -> u128 {
        let parts = self.lexical_parts(candidate);
        if parts.is_empty() {
            return 0;
        }

        let product = parts.iter().fold(1u128, |product, part| {
            let frequency = u128::from(self.store.frequency(part).unwrap_or(0));
            product.checked_mul(frequency).unwrap_or(u128::MAX)
        });

        if self.force_split == ForceSplit::Penalize && parts.len() <= 1 {
            product
        } else {
            product.saturating_mul(ForceSplit::PENALTY_DIVISOR)
        }
    }

    fn coherence(&self, candidate: &Segmentation) -> f64 {
        let parts = self.lexical_parts(candidate);
        let pairs = parts.len().saturating_sub(1);
        let Some(oracle) = self.oracle else {
            return 0.0;
        };

        // The leading zero term is part of the average.
        let total: f64 = parts
            .windows(2)
            .map(|pair| {
                oracle
                    .similarity(truncate(pair[0]), truncate(pair[1]))
                    .unwrap_or(0.0)
            })
            .sum();
        total / (pairs + 1) as f64
    }

    fn known_ratio(&self, candidate: &Segmentation) -> f64 {
        let parts = self.lexical_parts(candidate);
        if parts.is_empty() {
            return 0.0;
        }

        let known = parts
            .iter()
            .filter(|part| self.store.contains(part) || self.store.known_with_negative(part))
            .count();
        known as f64 / parts.len() as f64
    }
}

fn truncate(part: &str) -> &str {
    match part.char_indices().nth(SIMILARITY_PREFIX_LEN) {
        Some((index, _)) => &part[..index],
        None => part,
    }
}
