//! Parallel processing utilities and progress events

use crate::error::Result;
use crate::models::report::ScanIssue;
use std::path::PathBuf;
use std::sync::Arc;

/// Progress information emitted by the walker while a scan runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A file is about to be read
    Reading { path: PathBuf },
    /// A file or directory contributed nothing because of an isolated failure
    Skipped(ScanIssue),
}

/// Callback invoked from worker threads for every [`ScanEvent`]
pub type EventCallback = Arc<dyn Fn(ScanEvent) + Send + Sync>;

/// A callback that ignores every event
pub fn silent() -> EventCallback {
    Arc::new(|_| {})
}

/// Build the worker pool a scan runs on.
///
/// The pool size bounds how many files are read and parsed at once, and so how
/// many descriptors are open at a time.
pub fn build_thread_pool(threads: usize) -> Result<rayon::ThreadPool> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("depwalk-{}", index))
        .build()?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_thread_pool_size() {
        let pool = build_thread_pool(3).unwrap();
        assert_eq!(pool.current_num_threads(), 3);
    }

    #[test]
    fn test_silent_callback_accepts_events() {
        let callback = silent();
        callback(ScanEvent::Reading {
            path: PathBuf::from("/p/a.js"),
        });
    }
}
