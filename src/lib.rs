//! depwalk - static inventory of JavaScript module references
//!
//! This library walks a directory tree concurrently, extracts the module
//! references (ES module imports and re-exports, CommonJS `require`, AMD
//! `define`/`require`) from every eligible file, and aggregates them into a
//! [`DependencyIndex`] mapping each referenced module to the files that
//! reference it. Nothing is executed and no reference is resolved.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{aggregate, FileReferenceReader, ScanEvent, Scanner, TreeWalker};
pub use error::{ErrorSeverity, Result, ResultExt, ScanError};
pub use models::{
    config::{OutputFormat, Settings},
    index::DependencyIndex,
    policy::TraversalPolicy,
    reference::ReferenceRecord,
    report::{ScanIssue, ScanReport},
    target::ScanTarget,
};
pub use parsers::{OxcExtractor, ReferenceExtractor};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
