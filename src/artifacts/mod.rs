//! Artifact selection: which packages to look at, and which of their built
//! files count as artifacts.

pub mod filter;
pub mod scan;

pub use filter::{ArtifactFilter, filter_artifacts};
pub use scan::{
    PackageSelector, RepoInfo, ScanEvent, ScanQuery, ScanSummary, scan_artifacts, select_packages,
};
