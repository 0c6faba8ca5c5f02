//! Concurrent recursive directory walking
//!
//! Each directory is listed, its entries are split into eligible files and
//! traversable subdirectories, and both groups are processed in parallel with
//! rayon. A directory's result is only returned once every file read and every
//! subdirectory walk beneath it has finished.

use crate::core::parallel::{silent, EventCallback, ScanEvent};
use crate::core::reader::FileReferenceReader;
use crate::error::{Result, ScanError};
use crate::models::policy::TraversalPolicy;
use crate::models::reference::ReferenceRecord;
use crate::models::report::ScanIssue;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Records and isolated failures gathered from a subtree
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub records: Vec<ReferenceRecord>,
    /// Eligible files visited, whether or not they could be read
    pub files_visited: usize,
    pub issues: Vec<ScanIssue>,
}

impl WalkOutput {
    fn from_records(records: Vec<ReferenceRecord>) -> Self {
        Self {
            records,
            files_visited: 1,
            issues: Vec::new(),
        }
    }

    fn from_issue(issue: ScanIssue, files_visited: usize) -> Self {
        Self {
            records: Vec::new(),
            files_visited,
            issues: vec![issue],
        }
    }

    fn merge(&mut self, other: WalkOutput) {
        self.records.extend(other.records);
        self.files_visited += other.files_visited;
        self.issues.extend(other.issues);
    }
}

/// Immediate entries of one directory that pass the traversal policy
#[derive(Debug, Default)]
struct DirectoryListing {
    files: Vec<PathBuf>,
    subdirectories: Vec<PathBuf>,
    issues: Vec<ScanIssue>,
}

/// Walks a directory tree, reading every eligible file
pub struct TreeWalker {
    policy: TraversalPolicy,
    reader: FileReferenceReader,
    on_event: EventCallback,
}

impl TreeWalker {
    /// Create a new walker with the given policy and file reader
    pub fn new(policy: TraversalPolicy, reader: FileReferenceReader) -> Self {
        Self {
            policy,
            reader,
            on_event: silent(),
        }
    }

    /// Receive a [`ScanEvent`] for every file read and every isolated failure
    pub fn with_event_callback(mut self, on_event: EventCallback) -> Self {
        self.on_event = on_event;
        self
    }

    pub fn policy(&self) -> &TraversalPolicy {
        &self.policy
    }

    /// Walk `directory` and everything below it.
    ///
    /// Fails only when `directory` itself cannot be listed. Subdirectories that
    /// cannot be listed, and files that cannot be read or parsed, are reported
    /// as issues and contribute no records.
    pub fn walk(&self, directory: &Path) -> Result<WalkOutput> {
        self.walk_at_depth(directory, 0)
    }

    fn walk_at_depth(&self, directory: &Path, depth: usize) -> Result<WalkOutput> {
        let listing = self.list_directory(directory, depth)?;

        let (from_files, from_subdirectories) = rayon::join(
            || {
                listing
                    .files
                    .par_iter()
                    .map(|file| self.read_file(file))
                    .collect::<Vec<_>>()
            },
            || {
                listing
                    .subdirectories
                    .par_iter()
                    .map(|subdirectory| self.walk_subdirectory(subdirectory, depth + 1))
                    .collect::<Vec<_>>()
            },
        );

        let mut output = WalkOutput {
            issues: listing.issues,
            ..WalkOutput::default()
        };
        for part in from_files.into_iter().chain(from_subdirectories) {
            output.merge(part);
        }

        Ok(output)
    }

    fn read_file(&self, path: &Path) -> WalkOutput {
        (self.on_event)(ScanEvent::Reading {
            path: path.to_path_buf(),
        });

        match self.reader.read(path) {
            Ok(records) => WalkOutput::from_records(records),
            Err(err) => WalkOutput::from_issue(self.isolate(ScanIssue::file(path, &err)), 1),
        }
    }

    fn walk_subdirectory(&self, directory: &Path, depth: usize) -> WalkOutput {
        match self.walk_at_depth(directory, depth) {
            Ok(output) => output,
            Err(err) => {
                WalkOutput::from_issue(self.isolate(ScanIssue::traversal(directory, &err)), 0)
            }
        }
    }

    fn isolate(&self, issue: ScanIssue) -> ScanIssue {
        (self.on_event)(ScanEvent::Skipped(issue.clone()));
        issue
    }

    /// List the immediate entries of `directory`.
    ///
    /// Entries are sorted by name so results are stable between runs. Symlinks
    /// and other special entries are ignored; `file_type` does not follow links.
    fn list_directory(&self, directory: &Path, depth: usize) -> Result<DirectoryListing> {
        let entries =
            fs::read_dir(directory).map_err(|err| ScanError::traversal_error(directory, err))?;

        let mut listing = DirectoryListing::default();
        let descend = self.policy.allows_depth(depth + 1);

        for entry_result in entries {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(err) => {
                    let err = ScanError::traversal_error(directory, err);
                    listing.issues.push(self.isolate(ScanIssue::traversal(directory, &err)));
                    continue;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    let err = ScanError::traversal_error(&path, err);
                    listing.issues.push(self.isolate(ScanIssue::traversal(&path, &err)));
                    continue;
                }
            };

            if file_type.is_file() {
                if self.policy.is_eligible_file(&path) {
                    listing.files.push(path);
                }
            } else if file_type.is_dir()
                && descend
                && !self.policy.is_excluded_dir(&entry.file_name())
            {
                listing.subdirectories.push(path);
            }
        }

        listing.files.sort();
        listing.subdirectories.sort();

        Ok(listing)
    }
}
