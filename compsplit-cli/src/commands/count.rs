//! Count command implementation

use super::init_logging;
use crate::corpus::{write_counts, WikiCounter};
use crate::input::{resolve_patterns, FileReader, STDIN_PATTERN};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Dump files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", default_value = STDIN_PATTERN)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let sources = resolve_patterns(&self.input)?;
        let mut counter = WikiCounter::new().context("Failed to compile markup patterns")?;

        for source in &sources {
            log::info!("Reading wiki corpus {source}");
            let reader = FileReader::open(source)?;
            counter
                .feed_reader(reader)
                .with_context(|| format!("Failed to read {source}"))?;
        }

        log::info!("Sorting {} distinct words", counter.len());
        let counts = counter.into_sorted();

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_counts(BufWriter::new(file), &counts)?;
            }
            None => write_counts(io::stdout().lock(), &counts)?,
        }

        log::info!("Done");
        Ok(())
    }
}
