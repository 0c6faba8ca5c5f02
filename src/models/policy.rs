//! Inclusion and exclusion rules for a scan

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;

/// Directory names that are never descended into unless configured otherwise
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// File extensions eligible for reference extraction unless configured otherwise
pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "mjs"];

/// Which directories the walker enters and which files it reads.
///
/// Directory exclusion is an exact basename match, not a pattern language.
/// Extensions are stored without a leading dot and matched against the final
/// extension of a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalPolicy {
    excluded_directory_names: BTreeSet<String>,
    included_file_extensions: BTreeSet<String>,
    max_depth: Option<usize>,
}

impl TraversalPolicy {
    /// Create a policy from directory names and file extensions
    pub fn new<D, E>(excluded_directory_names: D, included_file_extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            excluded_directory_names: excluded_directory_names
                .into_iter()
                .map(Into::into)
                .collect(),
            included_file_extensions: included_file_extensions
                .into_iter()
                .map(|ext| normalize_extension(&ext.into()))
                .collect(),
            max_depth: None,
        }
    }

    /// Limit how many directory levels below the root are listed
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn excluded_directory_names(&self) -> &BTreeSet<String> {
        &self.excluded_directory_names
    }

    pub fn included_file_extensions(&self) -> &BTreeSet<String> {
        &self.included_file_extensions
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Whether a directory with this basename is skipped
    pub fn is_excluded_dir(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.excluded_directory_names.contains(name))
    }

    /// Whether a file at this path is read for references
    pub fn is_eligible_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.included_file_extensions.contains(ext))
    }

    /// Whether a directory at `depth` levels below the root may be listed
    pub fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}

impl Default for TraversalPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_DIRS.iter().copied(),
            DEFAULT_EXTENSIONS.iter().copied(),
        )
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
