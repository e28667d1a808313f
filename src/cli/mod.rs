//! # CLI Module
//!
//! Command-line surface: validates arguments, wires the
//! scan/read/aggregate/render pipeline, and keeps the two output streams
//! separate.
//!
//! ## Streams
//! The rendered report is the only thing written to stdout; per-file
//! diagnostics and fatal errors go to stderr. `dicom-scout ... > report.txt`
//! therefore captures a clean report while problem files stay visible on
//! the terminal.
//!
//! ## Exit Codes
//! - `0` - the command ran, however many individual files were unusable
//! - `1` - bad invocation or unusable root path; no report is produced
//!
//! ## Usage
//! ```bash
//! dicom-scout extract_study_identifiers_from_directory /data/ProstateX-0001
//! dicom-scout list_file_paths_by_series /data/ProstateX-0001 > series.txt
//! ```

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use console::Term;
use dicom_scout::core::{aggregate, reporter, DcmReader, DicomWalker};
use dicom_scout::Result;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str =
    "Please provide two arguments: 1) action to perform and 2) full path to a DICOM folder";

/// DICOM Scout - summarize the studies and series under a directory
#[derive(Parser, Debug)]
#[command(name = "dicom-scout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Report to produce
    #[arg(value_enum)]
    command: ReportKind,

    /// Directory containing DICOM files
    root: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportKind {
    /// Distinct StudyInstanceUID values, one per line
    #[value(name = "extract_study_identifiers_from_directory")]
    StudyIdentifiers,

    /// File paths grouped by SeriesDescription
    #[value(name = "list_file_paths_by_series")]
    PathsBySeries,
}

/// Run the CLI
pub fn run() -> ExitCode {
    let term = Term::stderr();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let message = if err.kind() == ErrorKind::InvalidValue {
                "Invalid command"
            } else {
                USAGE
            };
            term.write_line(message).ok();
            return ExitCode::FAILURE;
        }
    };

    dicom_scout::init_tracing();

    match execute(&term, cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            term.write_line(&err.to_string()).ok();
            ExitCode::FAILURE
        }
    }
}

fn execute(term: &Term, cli: Cli) -> Result<()> {
    let paths: Vec<_> = DicomWalker::new().scan(&cli.root)?.collect();
    let reader = DcmReader::new();

    let (rendered, diagnostics) = match cli.command {
        ReportKind::StudyIdentifiers => {
            let report = aggregate::extract_identifiers(&reader, paths);
            (reporter::render_identifiers(&report), report.diagnostics)
        }
        ReportKind::PathsBySeries => {
            let report = aggregate::group_by_series(&reader, paths);
            (reporter::render_grouping(&report), report.diagnostics)
        }
    };

    for diagnostic in &diagnostics {
        term.write_line(&diagnostic.to_string()).ok();
    }

    print!("{rendered}");

    Ok(())
}
