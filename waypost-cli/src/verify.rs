//! Verify command implementation for the Waypost CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waypost_core::CourseSolver;
use waypost_solver_bestfirst::BestFirstSolver;

use crate::CliError;
use crate::cases::{self, INPUT_PREFIX};

const ARG_VERIFY_DATA_DIR: &str = "data-dir";
const ENV_VERIFY_DATA_DIR: &str = "WAYPOST_CMDS_VERIFY_DATA_DIR";

/// Absolute tolerance when comparing reported and expected times.
const TOLERANCE: f64 = 0.001;

/// CLI arguments for the `verify` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Scan a directory for sample_input files, solve every \
                 recorded course, and compare the lowest traversal times \
                 against the paired sample_output files.",
    about = "Verify solver output against recorded sample data"
)]
#[ortho_config(prefix = "WAYPOST")]
pub(crate) struct VerifyArgs {
    /// Directory containing sample_input and sample_output files.
    #[arg(long = ARG_VERIFY_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    data_dir: Option<Utf8PathBuf>,
}

impl VerifyArgs {
    fn into_config(self) -> Result<VerifyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged
            .data_dir
            .map(|data_dir| VerifyConfig { data_dir })
            .ok_or(CliError::MissingArgument {
                field: ARG_VERIFY_DATA_DIR,
                env: ENV_VERIFY_DATA_DIR,
            })
    }
}

/// Resolved `verify` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct VerifyConfig {
    data_dir: Utf8PathBuf,
}

/// Outcome of comparing one recorded case against the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// Source file the course was read from.
    pub file: Utf8PathBuf,
    /// Zero-based position of the case within its file.
    pub case_index: usize,
    /// Lowest time reported by the solver.
    pub actual: f64,
    /// Expected lowest time from the paired output file.
    pub expected: f64,
}

impl CaseReport {
    /// Whether the reported time matches the expectation within tolerance.
    #[must_use]
    pub fn passed(&self) -> bool {
        (self.actual - self.expected).abs() < TOLERANCE
    }
}

pub(crate) fn run_verify(args: VerifyArgs, out: &mut impl Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let reports = verify_dir(&config.data_dir)?;
    render_report(&reports, out)?;
    let failures = reports.iter().filter(|report| !report.passed()).count();
    if failures > 0 {
        return Err(CliError::VerificationFailed {
            failures,
            total: reports.len(),
        });
    }
    Ok(())
}

/// Solve every recorded case under `data_dir` and compare against the
/// paired expected-output files.
///
/// Files whose names start with `sample_input` are treated as inputs; the
/// expected file name swaps that prefix for `sample_output`. Cases are
/// reported in lexicographic file order.
pub fn verify_dir(data_dir: &Utf8Path) -> Result<Vec<CaseReport>, CliError> {
    let dir = Dir::open_ambient_dir(data_dir, ambient_authority()).map_err(|source| {
        CliError::DataDir {
            path: data_dir.to_path_buf(),
            source,
        }
    })?;

    let mut input_names = Vec::new();
    let entries = dir.entries().map_err(|source| CliError::DataDir {
        path: data_dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| CliError::DataDir {
            path: data_dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().map_err(|source| CliError::DataDir {
            path: data_dir.to_path_buf(),
            source,
        })?;
        let is_file = entry
            .file_type()
            .map(|file_type| file_type.is_file())
            .unwrap_or(false);
        if is_file && name.starts_with(INPUT_PREFIX) {
            input_names.push(name);
        }
    }
    input_names.sort_unstable();

    let solver = BestFirstSolver::new();
    let mut reports = Vec::new();
    for name in input_names {
        let input_path = data_dir.join(&name);
        let content = dir
            .read_to_string(name.as_str())
            .map_err(|source| CliError::ReadFile {
                path: input_path.clone(),
                source,
            })?;
        let courses =
            cases::parse_courses(&content).map_err(|source| CliError::MalformedCases {
                path: input_path.clone(),
                source,
            })?;

        let expected_name = cases::expected_file_name(&name);
        let expected_path = data_dir.join(&expected_name);
        let expected_content =
            dir.read_to_string(expected_name.as_str())
                .map_err(|source| CliError::ReadFile {
                    path: expected_path.clone(),
                    source,
                })?;
        let expected =
            cases::expected_values(&expected_content).map_err(|source| {
                CliError::MalformedCases {
                    path: expected_path.clone(),
                    source,
                }
            })?;

        if courses.len() != expected.len() {
            return Err(CliError::MalformedCases {
                path: expected_path,
                source: cases::CaseFileError::ExpectedCountMismatch {
                    cases: courses.len(),
                    expected: expected.len(),
                },
            });
        }

        for (case_index, (course, expected)) in courses.iter().zip(expected).enumerate() {
            let actual = solver.plan(course).total_time();
            reports.push(CaseReport {
                file: input_path.clone(),
                case_index,
                actual,
                expected,
            });
        }
    }
    Ok(reports)
}

/// Write one PASS/FAIL line per case report.
pub fn render_report(reports: &[CaseReport], out: &mut impl Write) -> std::io::Result<()> {
    for report in reports {
        let diff = (report.actual - report.expected).abs();
        let verdict = if report.passed() { "PASS" } else { "FAIL" };
        writeln!(
            out,
            "For file {} case {}: optimized lowest time: {:.3} sec, expected: {:.3} sec, diff: {:.3} sec, {}",
            report.file, report.case_index, report.actual, report.expected, diff, verdict
        )?;
    }
    Ok(())
}
