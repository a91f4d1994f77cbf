//! Command-line harness for verifying solver output against recorded
//! sample data.
//!
//! The `verify` subcommand scans a data directory for `sample_input` files,
//! solves every recorded course with the best-first solver, and compares
//! the reported lowest times against the paired `sample_output` files.
#![forbid(unsafe_code)]

mod cases;
mod verify;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use thiserror::Error;

pub use cases::CaseFileError;
pub use verify::{CaseReport, render_report, verify_dir};

/// Run the Waypost CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Verify(args) => verify::run_verify(args, &mut std::io::stdout()),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waypost",
    about = "Course traversal timing utilities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve recorded sample courses and compare against expected times.
    Verify(verify::VerifyArgs),
}

/// Errors emitted by the Waypost CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing flag.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// The data directory could not be opened or scanned.
    #[error("failed to read data directory {path}: {source}")]
    DataDir {
        /// Directory that failed to open.
        path: Utf8PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// An input or expected file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// File that failed to read.
        path: Utf8PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// A sample file was malformed.
    #[error("malformed case file {path}: {source}")]
    MalformedCases {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Parse failure detail.
        source: CaseFileError,
    },
    /// A report line could not be written.
    #[error("failed to write report: {0}")]
    WriteReport(#[from] std::io::Error),
    /// One or more cases differed from their expected lowest time.
    #[error("{failures} of {total} cases failed verification")]
    VerificationFailed {
        /// Number of failing cases.
        failures: usize,
        /// Number of cases checked.
        total: usize,
    },
}
