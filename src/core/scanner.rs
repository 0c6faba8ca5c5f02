//! Scan orchestration: validate the target, walk on a bounded pool, aggregate

use crate::core::aggregator::aggregate;
use crate::core::parallel::{build_thread_pool, EventCallback, ScanEvent};
use crate::core::reader::FileReferenceReader;
use crate::core::walker::TreeWalker;
use crate::error::Result;
use crate::models::config::Settings;
use crate::models::report::ScanReport;
use crate::models::target::ScanTarget;
use crate::parsers::ast_parser::OxcExtractor;
use crate::parsers::extractor::ReferenceExtractor;
use std::sync::Arc;
use std::time::Instant;

/// Runs a complete scan for one set of settings
pub struct Scanner {
    settings: Settings,
    extractor: Arc<dyn ReferenceExtractor>,
}

impl Scanner {
    /// Create a scanner using the OXC extractor
    pub fn new(settings: Settings) -> Self {
        Self::with_extractor(settings, Arc::new(OxcExtractor::new()))
    }

    /// Create a scanner with a custom extractor
    pub fn with_extractor(settings: Settings, extractor: Arc<dyn ReferenceExtractor>) -> Self {
        Self {
            settings,
            extractor,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Scan the configured directory
    pub fn scan(&self) -> Result<ScanReport> {
        self.scan_with_progress(|_| {})
    }

    /// Scan the configured directory, reporting progress to `progress_callback`.
    ///
    /// The callback is invoked from worker threads. Configuration errors
    /// (invalid target, pool creation) are returned before any traversal.
    pub fn scan_with_progress<F>(&self, progress_callback: F) -> Result<ScanReport>
    where
        F: Fn(ScanEvent) + Send + Sync + 'static,
    {
        let start_time = Instant::now();

        let target = ScanTarget::new(&self.settings.scan_path)?;
        let pool = build_thread_pool(self.settings.threads)?;

        let reader = FileReferenceReader::new(target.clone(), self.extractor.clone())
            .with_dedupe(self.settings.dedupe_per_file);
        let on_event: EventCallback = Arc::new(progress_callback);
        let walker = TreeWalker::new(self.settings.policy(), reader).with_event_callback(on_event);

        let output = pool.install(|| walker.walk(target.path()))?;
        let index = aggregate(output.records);

        Ok(ScanReport {
            index,
            files_scanned: output.files_visited,
            issues: output.issues,
            duration: start_time.elapsed(),
        })
    }
}
