//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use compsplit_core::{CleaningMethod, Language, RankingMethod};

pub mod count;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split compound words, one per input line
    Split(split::SplitArgs),

    /// Count word frequencies in a MediaWiki XML dump
    Count(count::CountArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Count(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List ranking criteria
    Rankings,

    /// List cleaning passes
    Cleanings,
}

impl ListCommands {
    /// Render the listing, one entry per line
    pub fn render(&self) -> String {
        let lines: Vec<String> = match self {
            ListCommands::Languages => Language::ALL
                .iter()
                .map(|language| format!("{}\t{}", language.code(), language.name()))
                .collect(),
            ListCommands::Rankings => RankingMethod::ALL
                .iter()
                .map(|method| method.name().to_string())
                .collect(),
            ListCommands::Cleanings => CleaningMethod::ALL
                .iter()
                .map(|method| method.name().to_string())
                .collect(),
        };

        lines.iter().map(|line| format!("{line}\n")).collect()
    }
}

/// Initialize logging based on verbosity level
///
/// Nothing is logged under `--quiet`. `RUST_LOG` overrides `-v`.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. in tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
