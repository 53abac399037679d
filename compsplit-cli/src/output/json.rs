//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use compsplit_core::Segmentation;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all words as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<SplitRecord>,
}

/// Data structure for JSON output
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitRecord {
    /// The input word as read
    pub word: String,
    /// Parts of the chosen segmentation
    pub parts: Vec<String>,
    /// Compact rendering, e.g. `arbeit|s+zeit`
    pub formatted: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_split(&mut self, word: &str, segmentation: &Segmentation, rendered: &str) -> Result<()> {
        self.records.push(SplitRecord {
            word: word.to_string(),
            parts: segmentation.parts().to_vec(),
            formatted: rendered.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
