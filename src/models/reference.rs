//! Per-occurrence reference records

use serde::Serialize;

/// One module reference found in one file.
///
/// A file referencing the same module twice yields two records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceRecord {
    /// The referenced module, exactly as written in the source
    pub module_name: String,
    /// The referencing file, relative to the scan root
    pub source_file: String,
}

impl ReferenceRecord {
    pub fn new(module_name: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            source_file: source_file.into(),
        }
    }
}
