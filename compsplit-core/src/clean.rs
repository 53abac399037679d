//! Repair and rejection passes over raw segmentations
//!
//! Every pass looks at one candidate at a time and either returns it
//! (possibly with adjacent parts merged) or drops it. Merging only moves
//! part boundaries, so the concatenation of the parts never changes.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::lexicon::LexiconStore;
use crate::segmentation::Segmentation;

/// A single cleaning pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleaningMethod {
    /// Merge fragments into lexicon words and absorb a leading binding morpheme
    General,
    /// Merge trailing fragments shorter than three characters
    LastParts,
    /// Reject candidates ending in a disallowed suffix
    Suffix,
    /// Reject candidates containing a disallowed prefix as a part
    Prefix,
}

impl CleaningMethod {
    /// All cleaning methods in default order
    pub const ALL: [CleaningMethod; 4] = [
        CleaningMethod::General,
        CleaningMethod::LastParts,
        CleaningMethod::Suffix,
        CleaningMethod::Prefix,
    ];

    /// Name used on the command line and in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            CleaningMethod::General => "general",
            CleaningMethod::LastParts => "last_parts",
            CleaningMethod::Suffix => "suffix",
            CleaningMethod::Prefix => "prefix",
        }
    }

    /// Run this pass on one candidate
    pub fn apply(&self, store: &LexiconStore, candidate: Segmentation) -> Option<Segmentation> {
        match self {
            CleaningMethod::General => Some(merge_known(store, candidate)),
            CleaningMethod::LastParts => Some(merge_short_tail(candidate)),
            CleaningMethod::Suffix => (!ends_in_suffix(store, &candidate)).then_some(candidate),
            CleaningMethod::Prefix => (!has_prefix_part(store, &candidate)).then_some(candidate),
        }
    }
}

impl FromStr for CleaningMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        CleaningMethod::ALL
            .into_iter()
            .find(|method| method.name() == name)
            .ok_or_else(|| Error::UnknownCleaningMethod(name.to_string()))
    }
}

impl fmt::Display for CleaningMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered chain of cleaning passes
#[derive(Debug, Clone, Copy)]
pub struct Cleaner<'a> {
    store: &'a LexiconStore,
    passes: &'a [CleaningMethod],
}

impl<'a> Cleaner<'a> {
    /// Create a cleaner running `passes` in order
    pub fn new(store: &'a LexiconStore, passes: &'a [CleaningMethod]) -> Self {
        Self { store, passes }
    }

    /// Run one candidate through every pass
    pub fn clean_one(&self, candidate: Segmentation) -> Option<Segmentation> {
        self.passes
            .iter()
            .try_fold(candidate, |candidate, pass| pass.apply(self.store, candidate))
    }

    /// Clean all candidates, collapsing duplicates
    pub fn clean<I>(&self, candidates: I) -> BTreeSet<Segmentation>
    where
        I: IntoIterator<Item = Segmentation>,
    {
        candidates
            .into_iter()
            .filter_map(|candidate| self.clean_one(candidate))
            .collect()
    }
}

fn merge_known(store: &LexiconStore, candidate: Segmentation) -> Segmentation {
    let mut parts = candidate.into_parts().into_iter().peekable();
    let mut cleaned = Vec::new();
    let mut first = true;

    while let Some(part) = parts.next() {
        if store.contains(&part) {
            cleaned.push(part);
        } else if let Some(next) = parts.peek() {
            let merged = format!("{part}{next}");
            // A leading binding morpheme never stands alone.
            if store.contains(&merged) || (first && store.is_binding(&part)) {
                parts.next();
                cleaned.push(merged);
            } else {
                cleaned.push(part);
            }
        } else {
            cleaned.push(part);
        }
        first = false;
    }

    Segmentation::new(cleaned)
}

fn merge_short_tail(candidate: Segmentation) -> Segmentation {
    let mut parts = candidate.into_parts();
    while parts.len() > 1 && parts.last().is_some_and(|last| last.chars().count() < 3) {
        if let Some(last) = parts.pop() {
            if let Some(previous) = parts.last_mut() {
                previous.push_str(&last);
            }
        }
    }
    Segmentation::new(parts)
}

fn ends_in_suffix(store: &LexiconStore, candidate: &Segmentation) -> bool {
    if !candidate.is_split() {
        return false;
    }
    let Some(last) = candidate.last() else {
        return false;
    };
    let last_len = last.chars().count();

    store.suffixes().iter().any(|suffix| {
        last.starts_with(suffix.as_str()) && last_len - suffix.chars().count() <= 2
    })
}

fn has_prefix_part(store: &LexiconStore, candidate: &Segmentation) -> bool {
    candidate.is_split() && candidate.parts().iter().any(|part| store.is_prefix(part))
}
