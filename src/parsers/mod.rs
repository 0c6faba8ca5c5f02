//! Module reference extraction
//!
//! The walker depends only on the [`ReferenceExtractor`] trait; [`OxcExtractor`]
//! is the default implementation, parsing JavaScript with OXC and collecting
//! ES module, CommonJS and AMD references.

pub mod ast_parser;
pub mod extractor;
pub mod module_detector;

pub use ast_parser::OxcExtractor;
pub use extractor::{ExtractionFailure, ReferenceExtractor};
pub use module_detector::ReferenceCollector;
