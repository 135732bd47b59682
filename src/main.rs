//! Cursus CLI - simulate the career ladder and summarize the results.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

/// Cursus - a stochastic model of a rank-structured career ladder
#[derive(Parser, Debug)]
#[command(name = "cursus")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log progress to stderr (-v for run summaries, -vv for every year)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a single run and print the final summary
    Run {
        #[command(flatten)]
        model: cli::ModelArgs,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Include year-by-year outcomes in JSON output
        #[arg(long)]
        history: bool,
    },

    /// Simulate many independent runs and aggregate statistics
    Batch {
        #[command(flatten)]
        model: cli::ModelArgs,

        /// Number of runs (default: 100)
        #[arg(short, long, default_value = "100")]
        runs: u64,

        /// Starting seed (increments for each run)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::BatchFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::logger::init(args.verbose);

    let result = match args.command {
        Commands::Run {
            model,
            seed,
            format,
            history,
        } => cli::run::execute(&model, seed, format, history),

        Commands::Batch {
            model,
            runs,
            seed,
            format,
            progress,
        } => cli::batch::execute(&model, runs, seed, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
