//! # Scanner Module
//!
//! Discovers DICOM record files in a directory tree.
//!
//! Only files named with the fixed `.dcm` suffix are yielded. The suffix
//! check is case-sensitive: `IM0001.dcm` matches, `IM0001.DCM` does not.
//!
//! ## Example
//! ```rust,ignore
//! use dicom_scout::core::scanner::DicomWalker;
//!
//! let walker = DicomWalker::new();
//! let paths: Vec<_> = walker.scan("/data/ProstateX-0001".as_ref())?.collect();
//! ```

mod filter;
mod walker;

pub use filter::DicomFilter;
pub use walker::{DicomWalker, ScanIter};
