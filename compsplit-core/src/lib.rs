//! Lexicon-driven compound word splitting
//!
//! A compound such as German *Krankenhaus* is decomposed into its parts
//! (*kranken* + *haus*) by a four-stage pipeline:
//!
//! - **Enumeration**: every segmentation whose parts are lexicon words or
//!   binding morphemes, plus the unsplit word
//! - **Cleaning**: ordered repair and rejection passes
//! - **Ranking**: lexicographic comparison on configurable score criteria
//! - **Formatting**: `kranken+haus`, with binding morphemes attached by `|`
//!
//! # Example
//!
//! ```rust
//! use compsplit_core::{Config, LanguageProfile, LexiconStore, Splitter};
//! use std::sync::Arc;
//!
//! let profile = LanguageProfile::new("de", ["s", "en"], []);
//! let store = LexiconStore::builder(&profile)
//!     .words([("arbeit", 40), ("zeit", 90), ("kranken", 50), ("haus", 80)])
//!     .build();
//!
//! let splitter = Splitter::new(Arc::new(store), Config::default());
//! assert_eq!(splitter.split_formatted("Krankenhaus"), "kranken+haus");
//! assert_eq!(splitter.split_formatted("Arbeitszeit"), "arbeit|s+zeit");
//! ```
//!
//! Resources for a language are normally read from a directory with
//! [`Splitter::from_dir`]; see [`lexicon`] for the expected files.

pub mod clean;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod format;
pub mod language;
pub mod lexicon;
pub mod rank;
pub mod segmentation;
pub mod similarity;
pub mod splitter;

pub use clean::{Cleaner, CleaningMethod};
pub use config::{Config, ConfigBuilder, ForceSplit};
pub use enumerate::{SegmentEnumerator, Splits};
pub use error::{Error, Result};
pub use format::Formatter;
pub use language::{Language, LanguageProfile};
pub use lexicon::{LexiconBuilder, LexiconStore};
pub use rank::{RankedCandidate, Ranker, RankingMethod, Score};
pub use segmentation::Segmentation;
pub use similarity::{EmbeddingSpace, SimilarityOracle};
pub use splitter::Splitter;
