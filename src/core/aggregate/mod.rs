//! # Aggregate Module
//!
//! Folds per-file metadata into the two report structures.
//!
//! ## Failure Policy
//! A file that cannot be parsed, or that parses without the requested
//! field, costs exactly one [`Diagnostic`] and is excluded from the
//! report. No per-file failure ever aborts the run; only the two fatal
//! invocation errors do, and those happen before aggregation starts.

use crate::core::reader::{MetadataField, MetadataReader};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Non-fatal notice that one file contributed nothing to a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    file: String,
    field: MetadataField,
}

impl Diagnostic {
    fn for_file(path: &Path, field: MetadataField) -> Self {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { file, field }
    }

    /// Base name of the file the diagnostic refers to
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Problem reading {} from {}", self.field, self.file)
    }
}

/// Distinct study identifiers, plus the files that yielded none
#[derive(Debug, Default)]
pub struct IdentifierReport {
    /// Deduplicated `StudyInstanceUID` values
    pub identifiers: BTreeSet<String>,
    /// One entry per file that contributed nothing, in traversal order
    pub diagnostics: Vec<Diagnostic>,
}

/// File paths grouped by series label, plus the files that yielded none
///
/// Every successfully read path lands in exactly one group, keyed by the
/// raw `SeriesDescription` value. Members keep discovery order here and
/// are sorted at render time.
#[derive(Debug, Default)]
pub struct SeriesReport {
    pub groups: BTreeMap<String, Vec<PathBuf>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Collect the distinct study identifiers across `paths`
pub fn extract_identifiers<R: MetadataReader>(reader: &R, paths: Vec<PathBuf>) -> IdentifierReport {
    let mut report = IdentifierReport::default();

    for (path, value) in field_values(reader, paths, MetadataField::StudyInstanceUid) {
        match value {
            Some(identifier) => {
                report.identifiers.insert(identifier);
            }
            None => report
                .diagnostics
                .push(Diagnostic::for_file(&path, MetadataField::StudyInstanceUid)),
        }
    }

    report
}

/// Group `paths` by series label
pub fn group_by_series<R: MetadataReader>(reader: &R, paths: Vec<PathBuf>) -> SeriesReport {
    let mut report = SeriesReport::default();

    for (path, value) in field_values(reader, paths, MetadataField::SeriesDescription) {
        match value {
            Some(label) => report.groups.entry(label).or_default().push(path),
            None => report
                .diagnostics
                .push(Diagnostic::for_file(&path, MetadataField::SeriesDescription)),
        }
    }

    report
}

/// Read one field from every file, in parallel
///
/// Results come back in input order, so aggregate content and diagnostic
/// order match a sequential pass even though the reads themselves are
/// unordered. Aggregation only starts once every read has finished.
fn field_values<R: MetadataReader>(
    reader: &R,
    paths: Vec<PathBuf>,
    field: MetadataField,
) -> Vec<(PathBuf, Option<String>)> {
    paths
        .into_par_iter()
        .map(|path| {
            let value = reader
                .read(&path)
                .ok()
                .and_then(|record| record.field(field).map(str::to_owned));
            (path, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reader::ImagingRecord;
    use crate::error::ReadError;
    use std::collections::HashMap;

    /// Reader stub serving canned records; any path not listed is
    /// "unreadable".
    struct StubReader(HashMap<PathBuf, ImagingRecord>);

    impl StubReader {
        fn new(entries: Vec<(&str, Option<&str>, Option<&str>)>) -> Self {
            Self(
                entries
                    .into_iter()
                    .map(|(path, study, series)| {
                        (
                            PathBuf::from(path),
                            ImagingRecord::new(
                                study.map(str::to_owned),
                                series.map(str::to_owned),
                            ),
                        )
                    })
                    .collect(),
            )
        }
    }

    impl MetadataReader for StubReader {
        fn read(&self, path: &Path) -> Result<ImagingRecord, ReadError> {
            self.0.get(path).cloned().ok_or_else(|| ReadError {
                path: path.to_path_buf(),
                reason: "not a DICOM record".to_string(),
            })
        }
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn identifiers_are_deduplicated() {
        let reader = StubReader::new(vec![
            ("/scans/a.dcm", Some("S1"), None),
            ("/scans/b.dcm", Some("S1"), None),
            ("/scans/c.dcm", Some("S2"), None),
        ]);

        let report = extract_identifiers(
            &reader,
            paths(&["/scans/a.dcm", "/scans/b.dcm", "/scans/c.dcm"]),
        );

        assert_eq!(
            report.identifiers.iter().collect::<Vec<_>>(),
            vec!["S1", "S2"]
        );
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn identifier_set_ignores_traversal_order() {
        let reader = StubReader::new(vec![
            ("/scans/a.dcm", Some("S1"), None),
            ("/scans/b.dcm", Some("S2"), None),
        ]);

        let forward = extract_identifiers(&reader, paths(&["/scans/a.dcm", "/scans/b.dcm"]));
        let reverse = extract_identifiers(&reader, paths(&["/scans/b.dcm", "/scans/a.dcm"]));

        assert_eq!(forward.identifiers, reverse.identifiers);
    }

    #[test]
    fn unreadable_and_fieldless_files_each_cost_one_diagnostic() {
        let reader = StubReader::new(vec![
            ("/scans/good.dcm", Some("S1"), None),
            ("/scans/no_study.dcm", None, Some("T1")),
        ]);

        let report = extract_identifiers(
            &reader,
            paths(&["/scans/good.dcm", "/scans/no_study.dcm", "/scans/junk.dcm"]),
        );

        assert_eq!(report.identifiers.iter().collect::<Vec<_>>(), vec!["S1"]);
        assert_eq!(report.diagnostics.len(), 2);
        assert_eq!(report.diagnostics[0].file(), "no_study.dcm");
        assert_eq!(report.diagnostics[1].file(), "junk.dcm");
    }

    #[test]
    fn diagnostic_message_names_field_and_file() {
        let reader = StubReader::new(vec![]);

        let report = group_by_series(&reader, paths(&["/scans/broken.dcm"]));

        assert_eq!(
            report.diagnostics[0].to_string(),
            "Problem reading SeriesDescription from broken.dcm"
        );
    }

    #[test]
    fn grouping_is_a_partition_in_discovery_order() {
        let reader = StubReader::new(vec![
            ("/scans/z.dcm", None, Some("T1")),
            ("/scans/a.dcm", None, Some("T1")),
            ("/scans/m.dcm", None, Some("FLAIR")),
        ]);

        let report = group_by_series(
            &reader,
            paths(&["/scans/z.dcm", "/scans/a.dcm", "/scans/m.dcm"]),
        );

        assert_eq!(report.groups.len(), 2);
        // Discovery order within the group; sorting happens at render time.
        assert_eq!(
            report.groups["T1"],
            paths(&["/scans/z.dcm", "/scans/a.dcm"])
        );
        assert_eq!(report.groups["FLAIR"], paths(&["/scans/m.dcm"]));

        let grouped: usize = report.groups.values().map(Vec::len).sum();
        assert_eq!(grouped, 3);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn group_keys_are_raw_label_values() {
        let reader = StubReader::new(vec![
            ("/scans/a.dcm", None, Some(" t1 weighted")),
            ("/scans/b.dcm", None, Some("t1 weighted")),
        ]);

        let report = group_by_series(&reader, paths(&["/scans/a.dcm", "/scans/b.dcm"]));

        // No trimming or normalization of the observed label.
        assert_eq!(report.groups.len(), 2);
    }

    #[test]
    fn empty_input_produces_empty_reports() {
        let reader = StubReader::new(vec![]);

        let identifiers = extract_identifiers(&reader, Vec::new());
        let series = group_by_series(&reader, Vec::new());

        assert!(identifiers.identifiers.is_empty());
        assert!(identifiers.diagnostics.is_empty());
        assert!(series.groups.is_empty());
        assert!(series.diagnostics.is_empty());
    }
}
