//! Directory walking implementation using walkdir.

use super::filter::DicomFilter;
use crate::error::ScanError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursive scanner for DICOM record files
///
/// Walking is depth-first and sorted by file name, so the same tree is
/// always visited in the same order.
#[derive(Debug, Clone, Default)]
pub struct DicomWalker {
    filter: DicomFilter,
}

impl DicomWalker {
    /// Create a new walker
    pub fn new() -> Self {
        Self {
            filter: DicomFilter::new(),
        }
    }

    /// Lazily enumerate the DICOM files under `root`
    ///
    /// Fails only when `root` itself is missing or not a directory; entries
    /// that cannot be read during the walk are skipped with a warning.
    pub fn scan(&self, root: &Path) -> Result<ScanIter, ScanError> {
        if !root.exists() {
            return Err(ScanError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        if !root.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        debug!(root = %root.display(), "scanning for DICOM files");

        Ok(ScanIter {
            inner: WalkDir::new(root).sort_by_file_name().into_iter(),
            filter: self.filter.clone(),
        })
    }
}

/// Lazy stream of matched file paths produced by [`DicomWalker::scan`]
pub struct ScanIter {
    inner: walkdir::IntoIter,
    filter: DicomFilter,
}

impl Iterator for ScanIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                        return Some(entry.into_path());
                    }
                }
                Err(err) => {
                    warn!(%err, "skipping unreadable directory entry");
                }
            }
        }
    }
}
