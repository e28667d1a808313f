//! # DICOM Scout
//!
//! Summarizes the studies and series inside a directory of DICOM files.
//!
//! ## Core Philosophy
//! - **Never abort on a bad file** - malformed records are reported and skipped
//! - **Deterministic reports** - identical trees render byte-identical output
//! - **Clean report stream** - diagnostics never mix into the report itself
//!
//! ## Architecture
//! The library is split into a core engine (UI-agnostic) and the CLI layer:
//! - `core` - the scan/read/aggregate/render pipeline
//! - `error` - error types
//! - `cli` - command-line interface (lives in the binary)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{Result, ScoutError};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. Log lines go to
/// stderr so they never contaminate a report redirected from stdout.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
