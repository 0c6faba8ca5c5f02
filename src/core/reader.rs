//! Reading a single file into reference records

use crate::error::{Result, ScanError};
use crate::models::reference::ReferenceRecord;
use crate::models::target::ScanTarget;
use crate::parsers::extractor::ReferenceExtractor;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Reads a file as text and pairs each extracted reference with the file's
/// path relative to the scan root
pub struct FileReferenceReader {
    target: ScanTarget,
    extractor: Arc<dyn ReferenceExtractor>,
    dedupe_per_file: bool,
}

impl FileReferenceReader {
    pub fn new(target: ScanTarget, extractor: Arc<dyn ReferenceExtractor>) -> Self {
        Self {
            target,
            extractor,
            dedupe_per_file: false,
        }
    }

    /// Emit at most one record per distinct module for each file
    pub fn with_dedupe(mut self, dedupe_per_file: bool) -> Self {
        self.dedupe_per_file = dedupe_per_file;
        self
    }

    /// Read `path` and return one record per reference, in extractor order.
    ///
    /// Fails with [`ScanError::Read`] when the file cannot be read as UTF-8 text
    /// and [`ScanError::Extraction`] when the extractor rejects the content.
    pub fn read(&self, path: &Path) -> Result<Vec<ReferenceRecord>> {
        let source = fs::read_to_string(path).map_err(|err| ScanError::read_error(path, err))?;

        let mut references = self
            .extractor
            .extract(path, &source)
            .map_err(|failure| ScanError::extraction_error(path, failure.message))?;

        if self.dedupe_per_file {
            let mut seen = HashSet::new();
            references.retain(|module| seen.insert(module.clone()));
        }

        let source_file = self.target.relative_name(path);
        Ok(references
            .into_iter()
            .map(|module| ReferenceRecord::new(module, source_file.clone()))
            .collect())
    }
}
