//! Uniquely - CLI
//!
//! Reports the four-letter sequences that occur in exactly one word of a word
//! list.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uniquely::{
    commands::{
        ProcessConfig, ProcessOutcome, inspect_words,
        process::{DEFAULT_INPUT_PATH, DEFAULT_SEQUENCES_PATH, DEFAULT_WORDS_PATH},
        process_file,
    },
    output::{print_inspect_result, print_process_summary},
};

#[derive(Parser)]
#[command(
    name = "uniquely",
    about = "Find four-letter sequences that appear in exactly one word of a word list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to read, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output file for the unique sequences
    #[arg(short, long, global = true, default_value = DEFAULT_SEQUENCES_PATH)]
    sequences: PathBuf,

    /// Output file for the source word of each unique sequence
    #[arg(short, long, global = true, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Hide the progress spinner and summary
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write unique sequences and their source words (default)
    Process,

    /// Show the sequences of one or more words and whether each is unique
    Inspect {
        /// Words to inspect
        #[arg(required = true, value_name = "WORD")]
        targets: Vec<String>,
    },
}

/// Initialize the tracing subscriber on stderr
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to Process if no command given
    let command = cli.command.unwrap_or(Commands::Process);

    match command {
        Commands::Process => run_process_command(cli.input, cli.sequences, cli.words, cli.quiet),
        Commands::Inspect { targets } => run_inspect_command(&targets, &cli.input),
    }
}

fn run_process_command(
    input: PathBuf,
    sequences: PathBuf,
    words: PathBuf,
    quiet: bool,
) -> Result<()> {
    let config = ProcessConfig::new(input)
        .with_sequences_path(sequences)
        .with_words_path(words)
        .with_progress(!quiet);

    match process_file(&config)? {
        // The loader has already logged the missing path
        ProcessOutcome::MissingInput(_) => {}
        ProcessOutcome::Completed(summary) => {
            if !quiet {
                print_process_summary(&summary);
            }
        }
    }

    Ok(())
}

fn run_inspect_command(words: &[String], input: &Path) -> Result<()> {
    for result in inspect_words(words, input)? {
        print_inspect_result(&result);
    }
    Ok(())
}
