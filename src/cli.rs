//! Command-line options and the score-and-print entrypoint.
//!
//! ```text
//! bowling -g <notation> [-j true] [-n true]
//! echo '-5X9/...' | bowling [-j true] [-n true]
//! ```
//!
//! - `-g`: game notation, e.g. `X7/9-X-88/-6XXX81`
//! - `-j`: print a JSON report instead of the scorecard
//! - `-n`: disable colors
//!
//! A flag value cannot start with `-`, so games opening with a miss are read
//! from stdin instead. Flags override `BOWLING_FORMAT` / `NO_COLOR` from the
//! environment.

use std::io::BufRead;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::args::Parser;
use crate::core::score_card;
use crate::term::{OutputConfig, OutputFormat, ReportPrinter};

/// Flag schema understood by the `bowling` binary
pub const SCHEMA: &str = "g*,j,n";

/// Environment variable holding the tracing filter (default `warn`)
pub const LOG_ENV: &str = "BOWLING_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// `None` when `-g` was not given
    pub notation: Option<String>,
    pub output: OutputConfig,
}

impl CliOptions {
    /// Parse process arguments (program name first) on top of `base`.
    pub fn parse<I, S>(process_args: I, base: OutputConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parser = Parser::new(SCHEMA, process_args).context("invalid command line")?;

        let notation = Some(parser.get_str("g")?)
            .filter(|g| !g.is_empty())
            .map(str::to_string);

        let mut output = base;
        if parser.get_bool("j")? {
            output.format = OutputFormat::Json;
        }
        if parser.get_bool("n")? {
            output.color = false;
        }

        debug!(
            notation = ?notation,
            format = output.format.as_str(),
            color = output.color,
            "parsed options"
        );
        Ok(Self { notation, output })
    }
}

/// Read the notation from the first non-blank line of `reader`.
pub fn read_notation<R: BufRead>(reader: R) -> Result<String> {
    for line in reader.lines() {
        let line = line.context("reading notation from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            return Ok(line.to_string());
        }
    }
    bail!("missing game notation: use -g <notation> or pipe it on stdin")
}

/// Score the game and print the card (stdout) or the error (stderr).
///
/// A rejected notation is reported, not propagated: it maps to a failure exit
/// code. I/O failures are returned as errors.
pub fn run(notation: &str, output: OutputConfig) -> Result<ExitCode> {
    let printer = ReportPrinter::new(output);
    match score_card(notation) {
        Ok(card) => {
            info!(total = card.total(), complete = card.is_complete(), "scored game");
            printer
                .print_card(notation, &card)
                .context("writing scorecard")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            info!(code = err.code(), "rejected notation");
            printer
                .print_error(notation, &err)
                .context("writing error report")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
