//! # Error Module
//!
//! Error types for the DICOM directory summarizer.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Two fatal kinds only** - a bad invocation or a bad root path
//! - **Everything else recovers** - a bad file costs one diagnostic, never the run

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),
}

/// Fatal errors raised while validating the scan root
///
/// These abort the whole command before any report work starts.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// Per-file failure to parse a DICOM record
///
/// Returned by [`MetadataReader`](crate::core::reader::MetadataReader) for
/// any file that cannot be read as a DICOM record at all, including
/// zero-length or non-conforming binary content. Never fatal: the caller
/// turns it into one diagnostic and moves on to the next file.
#[derive(Error, Debug)]
#[error("Failed to read DICOM record {path}: {reason}")]
pub struct ReadError {
    pub path: PathBuf,
    pub reason: String,
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ScoutError>;
