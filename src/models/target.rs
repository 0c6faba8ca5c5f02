//! The directory a scan runs against

use crate::error::{Result, ScanError};
use crate::utils::paths::relative_display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An absolute path to an existing directory, validated once before traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    root: PathBuf,
}

impl ScanTarget {
    /// Validate `path` as a scan target.
    ///
    /// Fails with a configuration-class error when the path is empty, relative,
    /// missing, or not a directory. The checks run in that order so that each
    /// failure gets its own message.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();

        if root.as_os_str().is_empty() {
            return Err(ScanError::MissingTarget);
        }

        if !root.is_absolute() {
            return Err(ScanError::RelativeTarget { path: root });
        }

        match fs::metadata(&root) {
            Ok(metadata) if metadata.is_dir() => Ok(Self { root }),
            Ok(_) => Err(ScanError::NotADirectory { path: root }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(ScanError::TargetNotFound { path: root })
            }
            Err(err) => Err(ScanError::io_error(err)),
        }
    }

    /// The absolute root directory
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Render `path` relative to the root, using `/` separators
    pub fn relative_name(&self, path: &Path) -> String {
        relative_display(&self.root, path)
    }
}
