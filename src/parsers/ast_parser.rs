//! Reference extractor backed by the OXC parser

use crate::parsers::extractor::{ExtractionFailure, ReferenceExtractor};
use crate::parsers::module_detector::ReferenceCollector;
use oxc_allocator::Allocator;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use parking_lot::Mutex;
use std::path::Path;

/// Thread-safe allocator pool for reuse across parses
pub struct AllocatorPool {
    allocators: Mutex<Vec<Allocator>>,
}

impl AllocatorPool {
    /// Create a new allocator pool
    pub fn new(size: usize) -> Self {
        let allocators = (0..size).map(|_| Allocator::default()).collect();
        Self {
            allocators: Mutex::new(allocators),
        }
    }

    /// Take an allocator from the pool, or a fresh one when the pool is drained
    pub fn take(&self) -> Allocator {
        self.allocators.lock().pop().unwrap_or_default()
    }

    /// Reset an allocator and return it to the pool
    pub fn give_back(&self, mut allocator: Allocator) {
        allocator.reset();
        self.allocators.lock().push(allocator);
    }
}

/// Extracts ES module, CommonJS and AMD references by parsing with OXC.
///
/// Files are parsed with the goal implied by their extension (`.js`/`.mjs` as
/// modules), with JSX enabled for JavaScript. A file that fails to parse as a
/// module is retried as a script, so sloppy-mode CommonJS still yields its
/// `require` calls.
pub struct OxcExtractor {
    parse_options: ParseOptions,
    allocator_pool: AllocatorPool,
}

impl OxcExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                allow_return_outside_function: true,
                ..ParseOptions::default()
            },
            allocator_pool: AllocatorPool::new(num_cpus::get()),
        }
    }

    fn parse_with(
        &self,
        allocator: &Allocator,
        source: &str,
        source_type: SourceType,
    ) -> Result<Vec<String>, Vec<OxcDiagnostic>> {
        let ret = Parser::new(allocator, source, source_type)
            .with_options(self.parse_options.clone())
            .parse();

        if ret.panicked || !ret.errors.is_empty() {
            return Err(ret.errors);
        }

        Ok(ReferenceCollector::collect(&ret.program))
    }
}

impl Default for OxcExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceExtractor for OxcExtractor {
    fn extract(&self, path: &Path, source: &str) -> Result<Vec<String>, ExtractionFailure> {
        let mut source_type = SourceType::from_path(path).unwrap_or_else(|_| SourceType::mjs());
        // JSX in plain JavaScript files is common enough to accept everywhere
        if !source_type.is_typescript() {
            source_type = source_type.with_jsx(true);
        }
        let mut allocator = self.allocator_pool.take();

        let mut result = self.parse_with(&allocator, source, source_type);
        if result.is_err() && !source_type.is_script() {
            allocator.reset();
            if let Ok(references) =
                self.parse_with(&allocator, source, source_type.with_module(false))
            {
                result = Ok(references);
            }
        }

        self.allocator_pool.give_back(allocator);

        result.map_err(|errors| describe_failure(&errors))
    }
}

fn describe_failure(errors: &[OxcDiagnostic]) -> ExtractionFailure {
    match errors.first() {
        Some(first) if errors.len() > 1 => {
            ExtractionFailure::new(format!("{} (and {} more)", first, errors.len() - 1))
        }
        Some(first) => ExtractionFailure::new(first.to_string()),
        None => ExtractionFailure::new("parser gave up without a diagnostic"),
    }
}
