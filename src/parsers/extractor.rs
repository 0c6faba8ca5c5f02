//! The reference-extraction capability
//!
//! The walker never parses source itself. It hands file text to a
//! [`ReferenceExtractor`], which can be swapped out (for example in tests)
//! without touching traversal.

use std::path::Path;
use thiserror::Error;

/// Reason an extractor could not produce references for a file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractionFailure {
    pub message: String,
}

impl ExtractionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Statically extracts module references from source text.
///
/// Implementations return references in the order they appear in the source.
/// `path` is only a hint (e.g. for choosing a syntax from the extension); the
/// extractor must not read it.
pub trait ReferenceExtractor: Send + Sync {
    fn extract(&self, path: &Path, source: &str) -> Result<Vec<String>, ExtractionFailure>;
}

impl<F> ReferenceExtractor for F
where
    F: Fn(&str) -> Result<Vec<String>, ExtractionFailure> + Send + Sync,
{
    fn extract(&self, _path: &Path, source: &str) -> Result<Vec<String>, ExtractionFailure> {
        self(source)
    }
}
