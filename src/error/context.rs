//! Error context utilities for depwalk

use crate::error::{Result, ScanError};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| ScanError::Context {
            message: format!("{}: {}", context(), err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_with_context() {
        let result: std::result::Result<(), io::Error> = Err(io::Error::new(
            io::ErrorKind::NotFound,
            "file not found",
        ));

        let with_context = result.with_context(|| "Failed to write config");

        match with_context {
            Err(ScanError::Context { message }) => {
                assert!(message.contains("Failed to write config"));
                assert!(message.contains("file not found"));
            }
            other => panic!("Expected Context error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_context_passes_ok_through() {
        let result: std::result::Result<u32, io::Error> = Ok(7);
        assert_eq!(result.with_context(|| "unused").unwrap(), 7);
    }
}
