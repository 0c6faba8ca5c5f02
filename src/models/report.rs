//! Scan results and isolated per-file/per-directory issues

use crate::error::ScanError;
use crate::models::index::DependencyIndex;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Kind of failure that was isolated during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// A subdirectory could not be listed
    Traversal,
    /// A file could not be read as text
    Read,
    /// A file could not be parsed
    Extraction,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Traversal => write!(f, "traversal"),
            IssueKind::Read => write!(f, "read"),
            IssueKind::Extraction => write!(f, "extraction"),
        }
    }
}

/// A failure that contributed nothing to the index but did not abort the scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanIssue {
    pub path: PathBuf,
    pub kind: IssueKind,
    pub message: String,
}

impl ScanIssue {
    /// A directory below the root that could not be listed
    pub fn traversal(path: impl Into<PathBuf>, err: &ScanError) -> Self {
        Self::new(path, IssueKind::Traversal, err)
    }

    /// A file the reader gave up on; anything but a parse failure is a read failure
    pub fn file(path: impl Into<PathBuf>, err: &ScanError) -> Self {
        let kind = match err {
            ScanError::Extraction { .. } => IssueKind::Extraction,
            _ => IssueKind::Read,
        };
        Self::new(path, kind, err)
    }

    fn new(path: impl Into<PathBuf>, kind: IssueKind, err: &ScanError) -> Self {
        Self {
            path: path.into(),
            kind,
            message: err.user_message(),
        }
    }
}

/// Everything a completed scan produced
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub index: DependencyIndex,
    pub files_scanned: usize,
    pub issues: Vec<ScanIssue>,
    pub duration: Duration,
}

impl ScanReport {
    pub fn module_count(&self) -> usize {
        self.index.len()
    }

    pub fn reference_count(&self) -> usize {
        self.index.reference_count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// One-line summary for the log channel
    pub fn summary_line(&self) -> String {
        format!(
            "Scanned {} files: {} modules, {} references, {} issues in {:.2?}",
            self.files_scanned,
            self.module_count(),
            self.reference_count(),
            self.issues.len(),
            self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_issue_kind() {
        let err = ScanError::extraction_error("/p/bad.js", "Unexpected token");
        let issue = ScanIssue::file("/p/bad.js", &err);
        assert_eq!(issue.kind, IssueKind::Extraction);
        assert!(issue.message.contains("bad.js"));

        let err = ScanError::read_error(
            "/p/gone.js",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(ScanIssue::file("/p/gone.js", &err).kind, IssueKind::Read);
    }

    #[test]
    fn test_traversal_issue() {
        let err = ScanError::traversal_error(
            "/p/locked",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let issue = ScanIssue::traversal("/p/locked", &err);
        assert_eq!(issue.kind, IssueKind::Traversal);
        assert!(issue.message.contains("permission denied"));
    }

    #[test]
    fn test_summary_line() {
        let report = ScanReport {
            files_scanned: 3,
            ..Default::default()
        };
        let line = report.summary_line();
        assert!(line.contains("3 files"));
        assert!(line.contains("0 modules"));
        assert!(line.contains("0 issues"));
    }
}
