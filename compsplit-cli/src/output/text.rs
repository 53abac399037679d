//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use compsplit_core::Segmentation;
use std::io::Write;

/// Plain text formatter - outputs `word<TAB>split` per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_split(&mut self, word: &str, _segmentation: &Segmentation, rendered: &str) -> Result<()> {
        writeln!(self.writer, "{word}\t{rendered}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
