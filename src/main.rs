//! # dicom-scout CLI
//!
//! Command-line interface for the DICOM directory summarizer.
//!
//! ## Usage
//! ```bash
//! dicom-scout extract_study_identifiers_from_directory /data/scans
//! dicom-scout list_file_paths_by_series /data/scans > series.txt
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
