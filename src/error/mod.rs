//! Error handling for depwalk
//!
//! This module provides the error taxonomy used across the crate, its severity
//! classification and helpers for attaching context to foreign errors.

pub mod context;
#[cfg(test)]
mod tests;
pub mod types;

pub use context::ResultExt;
pub use types::{ErrorSeverity, Result, ScanError};
