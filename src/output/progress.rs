//! Progress reporting functionality
//!
//! The log channel: a spinner plus status lines on stderr, kept apart from the
//! index written to stdout. Nothing is printed in quiet mode.

use crate::core::parallel::ScanEvent;
use ansi_term::Colour::{Green, Yellow};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// Progress reporter for a running scan
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    use_colors: bool,
    spinner: ProgressBar,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool, verbose: bool, show_progress: bool, use_colors: bool) -> Self {
        let spinner = if quiet || !show_progress {
            ProgressBar::hidden()
        } else {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed}] {pos} files {wide_msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner
        };

        Self {
            quiet,
            verbose,
            use_colors,
            spinner,
        }
    }

    /// Start the spinner for an operation
    pub fn start(&self, operation: &str) {
        if self.quiet {
            return;
        }
        self.spinner.set_message(operation.to_string());
        self.spinner.enable_steady_tick(Duration::from_millis(100));
    }

    /// Update from an event sent by the walker
    pub fn handle(&self, event: ScanEvent) {
        if self.quiet {
            return;
        }
        match event {
            ScanEvent::Reading { path } => {
                self.spinner.inc(1);
                if self.verbose {
                    self.print(&format!("Reading {}", path.display()));
                }
                self.spinner.set_message(path.display().to_string());
            }
            ScanEvent::Skipped(issue) => self.warn(&issue.message),
        }
    }

    /// Stop the spinner and print a closing line
    pub fn finish(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.spinner.finish_and_clear();
        if self.use_colors {
            eprintln!("{}", Green.paint(message));
        } else {
            eprintln!("{}", message);
        }
    }

    /// Print a line on the log channel (respects quiet mode)
    pub fn print(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.spinner.suspend(|| eprintln!("{}", message));
    }

    /// Print a warning line on the log channel (respects quiet mode)
    pub fn warn(&self, message: &str) {
        if self.quiet {
            return;
        }
        let label = if self.use_colors {
            Yellow.bold().paint("warning:").to_string()
        } else {
            "warning:".to_string()
        };
        self.spinner.suspend(|| eprintln!("{} {}", label, message));
    }
}

/// Create a progress callback that forwards scan events to a ProgressReporter
pub fn create_progress_callback(
    reporter: Arc<ProgressReporter>,
) -> impl Fn(ScanEvent) + Send + Sync + 'static {
    move |event: ScanEvent| reporter.handle(event)
}
