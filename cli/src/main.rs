//! fuzztensor CLI: list harnesses, replay corpus files, inspect reports

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{print_harness_table, print_report, replay_corpus};

#[derive(Parser)]
#[command(
    name = "fuzztensor",
    version,
    about = "Replay fuzz corpora through registered operator harnesses",
    long_about = "fuzztensor replays corpus files through the built-in operator \
harnesses and prints the triage verdict for each input.\n\nCommands:\n  - list: \
show the registered harnesses and their minimum-size gates\n  - run: replay one \
or more corpus files through a named harness\n  - report: print a saved triage \
report",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered harnesses
    List,
    /// Replay corpus files through one harness
    Run {
        /// Harness name (see `list`)
        harness: String,
        /// Corpus files to replay
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Write a triage report container (.fzrp) with one entry per input
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
    /// Print a saved triage report
    Report {
        /// Path to the .fzrp file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::List => print_harness_table(),
        Commands::Run {
            harness,
            inputs,
            report,
        } => replay_corpus(&harness, &inputs, report.as_deref()),
        Commands::Report { file } => print_report(&file),
    }
}
