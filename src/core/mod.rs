//! Core functionality for directory walking and dependency aggregation

pub mod aggregator;
pub mod parallel;
pub mod reader;
pub mod scanner;
pub mod walker;

pub use aggregator::aggregate;
pub use parallel::{EventCallback, ScanEvent};
pub use reader::FileReferenceReader;
pub use scanner::Scanner;
pub use walker::{TreeWalker, WalkOutput};
