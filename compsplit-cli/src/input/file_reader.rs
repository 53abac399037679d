//! Word list reading

use super::InputSource;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Reader for one-word-per-line inputs
pub struct FileReader;

impl FileReader {
    /// Open a source for buffered reading
    pub fn open(source: &InputSource) -> Result<Box<dyn BufRead>> {
        match source {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Read words, one per line, up to the first blank line
    ///
    /// Surrounding whitespace is trimmed from every word.
    pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                break;
            }
            words.push(word.to_string());
        }
        Ok(words)
    }

    /// Read the words of a source
    pub fn read_source(source: &InputSource) -> Result<Vec<String>> {
        let reader = Self::open(source)?;
        Self::read_words(reader).with_context(|| format!("Failed to read words from {source}"))
    }
}
