//! compsplit command-line entry point

use clap::Parser;
use compsplit_cli::commands::Commands;

/// Split compound words using a frequency lexicon
#[derive(Debug, Parser)]
#[command(name = "compsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
