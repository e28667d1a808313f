//! # Reporter Module
//!
//! Renders aggregate structures as human-readable text.
//!
//! All output is sorted lexicographically, so running the same command
//! twice against an unchanged tree yields byte-identical reports. Empty
//! aggregates render as the empty string.

use crate::core::aggregate::{IdentifierReport, SeriesReport};

/// Render the identifier report, one identifier per line
pub fn render_identifiers(report: &IdentifierReport) -> String {
    let mut out = String::new();

    for identifier in &report.identifiers {
        out.push_str(identifier);
        out.push('\n');
    }

    out
}

/// Render the series grouping report
///
/// Each group is a blank line, a `Series:` header, then its member paths
/// indented by two spaces. The blank line precedes every header, the
/// first included.
pub fn render_grouping(report: &SeriesReport) -> String {
    let mut out = String::new();

    for (label, paths) in &report.groups {
        out.push('\n');
        out.push_str("Series: ");
        out.push_str(label);
        out.push('\n');

        let mut members: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        members.sort();

        for member in members {
            out.push_str("  ");
            out.push_str(&member);
            out.push('\n');
        }
    }

    out
}
