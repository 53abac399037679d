//! Split command implementation

use super::init_logging;
use crate::config::{CliConfig, SplitterConfig};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputSource, STDIN_PATTERN};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use compsplit_core::{Config, ForceSplit, Segmentation, Splitter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", default_value = STDIN_PATTERN)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language code (de, sv, hu)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Remove stopwords and reject disallowed affixes
    #[arg(short = 'S', long, value_enum, value_name = "SWITCH")]
    pub stopwords: Option<Switch>,

    /// Prefer decomposition (no, yes, penalize)
    #[arg(short = 'f', long, value_name = "MODE")]
    pub force_split: Option<String>,

    /// Ignore lexicon entries below this frequency
    #[arg(short = 'M', long, value_name = "N")]
    pub min_freq: Option<u64>,

    /// Maximum candidates enumerated per word
    #[arg(long, value_name = "N")]
    pub max_candidates: Option<usize>,

    /// Only read the first LINES lexicon lines
    #[arg(long, value_name = "LINES")]
    pub limit: Option<usize>,

    /// Ranking criteria in priority order, comma separated
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub ranking: Option<Vec<String>>,

    /// Cleaning passes in application order, comma separated
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub cleaning: Option<Vec<String>>,

    /// Directory holding the lexicon resources
    #[arg(long, value_name = "DIR", env = "COMPSPLIT_LEXICON_DIR")]
    pub lexicon_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Split words on a thread pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// yes/no command-line switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Switch {
    /// Enabled
    Yes,
    /// Disabled
    No,
}

impl Switch {
    fn enabled(self) -> bool {
        self == Switch::Yes
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.splitter_config(&file_config.splitter)?;
        let lexicon_dir = self
            .lexicon_dir
            .clone()
            .or(file_config.resources.lexicon_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let format = self
            .format
            .or(file_config.output.format)
            .unwrap_or(OutputFormat::Text);

        let sources = resolve_patterns(&self.input)?;

        log::info!(
            "Loading {} resources from {}",
            config.language().name(),
            lexicon_dir.display()
        );
        let splitter = Splitter::from_dir(&lexicon_dir, config).map_err(CliError::from)?;

        let mut inputs: Vec<(&InputSource, Vec<String>)> = Vec::with_capacity(sources.len());
        for source in &sources {
            inputs.push((source, FileReader::read_source(source)?));
        }
        let total: usize = inputs.iter().map(|(_, words)| words.len()).sum();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = format.formatter(writer);

        let pool = self.thread_pool()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_words(total as u64);

        for (source, words) in &inputs {
            let splits = self.split_words(&splitter, pool.as_ref(), words);
            for (word, segmentation) in words.iter().zip(&splits) {
                formatter.format_split(word, segmentation, &splitter.format(segmentation))?;
            }
            progress.words_completed(&source.to_string(), words.len() as u64);
        }

        formatter.finish()?;
        progress.finish();
        log::info!("Split {total} words from {} input(s)", inputs.len());

        Ok(())
    }

    /// Merge command-line values over file values into a splitter config
    pub fn splitter_config(&self, file: &SplitterConfig) -> Result<Config> {
        let mut builder = Config::builder();

        if let Some(language) = self.language.as_ref().or(file.language.as_ref()) {
            builder = builder.language(language.as_str());
        }
        if let Some(enabled) = self.stopwords.map(Switch::enabled).or(file.stopwords) {
            builder = builder.stopwords(enabled);
        }
        if let Some(mode) = self.force_split.as_ref().or(file.force_split.as_ref()) {
            let mode: ForceSplit = mode.parse().map_err(CliError::from)?;
            builder = builder.force_split(mode);
        }
        if let Some(min_freq) = self.min_freq.or(file.min_freq) {
            builder = builder.min_freq(min_freq);
        }
        builder = builder
            .limit(self.limit.or(file.limit))
            .max_candidates(self.max_candidates.or(file.max_candidates));

        if let Some(names) = self.ranking.as_ref().or(file.ranking.as_ref()) {
            builder = builder.ranking(non_empty(names));
        }
        if let Some(names) = self.cleaning.as_ref().or(file.cleaning.as_ref()) {
            builder = builder.cleaning(non_empty(names));
        }

        Ok(builder.build().map_err(CliError::from)?)
    }

    fn thread_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        if !self.parallel && self.threads.is_none() {
            return Ok(None);
        }

        let threads = self.threads.unwrap_or_else(num_cpus::get);
        log::info!("Splitting on {threads} threads");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create thread pool")?;
        Ok(Some(pool))
    }

    fn split_words(
        &self,
        splitter: &Splitter,
        pool: Option<&rayon::ThreadPool>,
        words: &[String],
    ) -> Vec<Segmentation> {
        match pool {
            Some(pool) => pool.install(|| splitter.split_batch(words)),
            None => words.iter().map(|word| splitter.split(word)).collect(),
        }
    }
}

fn non_empty(names: &[String]) -> impl Iterator<Item = &String> {
    names.iter().filter(|name| !name.trim().is_empty())
}
