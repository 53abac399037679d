//! Distributional similarity between word forms
//!
//! The ranker asks a [`SimilarityOracle`] how related two adjacent parts
//! are. A miss is `None` and scores as zero.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Read-only coherence score between two short strings
pub trait SimilarityOracle: Send + Sync {
    /// Similarity of `a` and `b`, or `None` if either is unknown
    fn similarity(&self, a: &str, b: &str) -> Option<f64>;
}

impl<F> SimilarityOracle for F
where
    F: Fn(&str, &str) -> Option<f64> + Send + Sync,
{
    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        self(a, b)
    }
}

/// Word vectors in word2vec text format, compared by cosine similarity
///
/// The expected input is an optional `<count> <dimension>` header followed
/// by one `token v1 v2 ... vN` line per token. Tokens are lowercased.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingSpace {
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl EmbeddingSpace {
    /// Load a vector file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::resource(path, e))?;
        let space = Self::from_reader(BufReader::new(file), path)?;
        log::info!(
            "Loaded {} vectors of dimension {} from {}",
            space.len(),
            space.dimension,
            path.display()
        );
        Ok(space)
    }

    /// Parse vectors from a reader; `source` names the input in errors
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self> {
        let mut space = Self::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::resource(source, e))?;
            let mut fields = line.split_whitespace();
            let Some(token) = fields.next() else {
                continue;
            };
            let values: Vec<&str> = fields.collect();

            if index == 0 && values.len() == 1 && token.parse::<usize>().is_ok() {
                // word2vec header: "<count> <dimension>"
                space.dimension = values[0]
                    .parse()
                    .map_err(|_| Error::parse(source, 1, "bad dimension in header"))?;
                continue;
            }

            let vector = values
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| Error::parse(source, index + 1, format!("bad component: {e}")))?;

            if vector.is_empty() {
                return Err(Error::parse(source, index + 1, "vector has no components"));
            }
            if space.dimension == 0 {
                space.dimension = vector.len();
            } else if vector.len() != space.dimension {
                return Err(Error::parse(
                    source,
                    index + 1,
                    format!(
                        "expected {} components, found {}",
                        space.dimension,
                        vector.len()
                    ),
                ));
            }

            space.vectors.insert(token.to_lowercase(), vector);
        }

        Ok(space)
    }

    /// Add a single vector
    pub fn insert(&mut self, token: impl Into<String>, vector: Vec<f32>) {
        if self.dimension == 0 {
            self.dimension = vector.len();
        }
        self.vectors.insert(token.into(), vector);
    }

    /// Vector dimension (0 while empty)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True if no vectors are loaded
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl SimilarityOracle for EmbeddingSpace {
    fn similarity(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.vectors.get(a)?;
        let b = self.vectors.get(b)?;
        cosine(a, b)
    }
}

fn cosine(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}
