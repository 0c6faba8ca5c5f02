//! Data models and structures for depwalk

pub mod config;
pub mod index;
pub mod policy;
pub mod reference;
pub mod report;
pub mod target;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use index::DependencyIndex;
pub use policy::TraversalPolicy;
pub use reference::ReferenceRecord;
pub use report::{IssueKind, ScanIssue, ScanReport};
pub use target::ScanTarget;
