//! File filtering logic for the scanner.

use std::path::Path;

/// The fixed suffix DICOM record files are matched by.
const DICOM_SUFFIX: &str = ".dcm";

/// Filters files to determine if they are DICOM record candidates
#[derive(Debug, Clone, Default)]
pub struct DicomFilter;

impl DicomFilter {
    /// Create a new filter
    pub fn new() -> Self {
        Self
    }

    /// Check if a file should be included
    ///
    /// The suffix match is case-sensitive, so `.DCM` exports are not
    /// picked up.
    pub fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(DICOM_SUFFIX))
            .unwrap_or(false)
    }
}
