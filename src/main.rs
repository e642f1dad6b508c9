//! Bowling score calculator (default binary).
//!
//! Reads the game from `-g` (or stdin), prints a scorecard or JSON report.
//! Logging goes to stderr and is controlled by `BOWLING_LOG` (an `EnvFilter`
//! directive).

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bowling::cli::{self, CliOptions, LOG_ENV};
use bowling::term::OutputConfig;

fn main() -> Result<ExitCode> {
    init_tracing();

    let options = CliOptions::parse(std::env::args(), OutputConfig::from_env())?;
    let notation = match options.notation {
        Some(notation) => notation,
        None => cli::read_notation(std::io::stdin().lock())?,
    };
    cli::run(&notation, options.output)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
