//! # Reader Module
//!
//! Extracts per-file metadata from DICOM records.
//!
//! Binary parsing is delegated to the `dicom` crate; this module only
//! decides which fields to surface and what counts as a failure. The
//! aggregation engine never touches a DICOM object directly - it consumes
//! the [`MetadataReader`] contract, which makes the "unreadable file" and
//! "readable but missing a field" outcomes explicit instead of faults.
//!
//! ## Extracted Fields
//! - `StudyInstanceUID` - groups records taken during one patient study
//! - `SeriesDescription` - labels records taken under one acquisition series

use crate::error::ReadError;
use dicom::core::Tag;
use dicom::dictionary_std::tags;
use dicom::object::DefaultDicomObject;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// The two record fields the reports are built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    StudyInstanceUid,
    SeriesDescription,
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataField::StudyInstanceUid => write!(f, "StudyInstanceUID"),
            MetadataField::SeriesDescription => write!(f, "SeriesDescription"),
        }
    }
}

/// Metadata extracted from one imaging record
///
/// Absence of a field is a normal, expected outcome - many valid records
/// simply do not carry a series description.
#[derive(Debug, Clone, Default)]
pub struct ImagingRecord {
    study_identifier: Option<String>,
    series_label: Option<String>,
}

impl ImagingRecord {
    /// Build a record from its two optional fields
    pub fn new(study_identifier: Option<String>, series_label: Option<String>) -> Self {
        Self {
            study_identifier,
            series_label,
        }
    }

    /// The `StudyInstanceUID` value, if present and non-empty
    pub fn study_identifier(&self) -> Option<&str> {
        self.study_identifier.as_deref()
    }

    /// The `SeriesDescription` value, if present and non-empty
    pub fn series_label(&self) -> Option<&str> {
        self.series_label.as_deref()
    }

    /// Look up one of the extracted fields
    pub fn field(&self, field: MetadataField) -> Option<&str> {
        match field {
            MetadataField::StudyInstanceUid => self.study_identifier(),
            MetadataField::SeriesDescription => self.series_label(),
        }
    }
}

/// Trait for metadata readers
///
/// Implement this trait to substitute the parser (e.g., for testing).
pub trait MetadataReader: Send + Sync {
    /// Parse the record at `path`
    ///
    /// Returns `Err` only when the file cannot be read as a DICOM record at
    /// all. A readable record that lacks a field yields `Ok` with that
    /// field absent.
    fn read(&self, path: &Path) -> Result<ImagingRecord, ReadError>;
}

/// Reader backed by the `dicom` crate parser
#[derive(Debug, Clone, Copy, Default)]
pub struct DcmReader;

impl DcmReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for DcmReader {
    fn read(&self, path: &Path) -> Result<ImagingRecord, ReadError> {
        let object = dicom::object::open_file(path).map_err(|err| {
            debug!(path = %path.display(), %err, "unreadable DICOM record");
            ReadError {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }
        })?;

        Ok(ImagingRecord {
            study_identifier: string_element(&object, tags::STUDY_INSTANCE_UID),
            series_label: string_element(&object, tags::SERIES_DESCRIPTION),
        })
    }
}

/// Extract a single string value, mapping absent or empty values to `None`
fn string_element(object: &DefaultDicomObject, tag: Tag) -> Option<String> {
    let value = object.element(tag).ok()?.to_str().ok()?;
    if value.is_empty() {
        None
    } else {
        Some(value.into_owned())
    }
}
