//! Segmentation value type

use std::fmt;

/// One way of cutting a word into consecutive parts
///
/// Parts are never empty and concatenating them reproduces the word the
/// segmentation was produced from. Ordering compares the parts sequence,
/// which is what ranking uses as its final tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segmentation {
    parts: Vec<String>,
}

impl Segmentation {
    /// Create a segmentation from its parts
    ///
    /// Empty parts are dropped; they cannot contribute to the concatenation.
    pub fn new<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Self {
        Self {
            parts: parts
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// The unsplit word as a one-part segmentation
    pub fn whole(word: impl Into<String>) -> Self {
        Self::new([word.into()])
    }

    /// Parts in order
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Consume into the parts vector
    pub fn into_parts(self) -> Vec<String> {
        self.parts
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True if there are no parts (only for an empty word)
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// True if the word was actually decomposed
    pub fn is_split(&self) -> bool {
        self.parts.len() > 1
    }

    /// Concatenation of all parts
    pub fn joined(&self) -> String {
        self.parts.concat()
    }

    /// Last part, if any
    pub fn last(&self) -> Option<&str> {
        self.parts.last().map(String::as_str)
    }
}

impl From<Vec<String>> for Segmentation {
    fn from(parts: Vec<String>) -> Self {
        Self::new(parts)
    }
}

impl fmt::Display for Segmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.parts.join(", "))
    }
}
