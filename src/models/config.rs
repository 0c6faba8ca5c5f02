//! Configuration-related data structures

use crate::models::policy::{TraversalPolicy, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for depwalk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory to scan; must be absolute by the time a scan starts
    pub scan_path: PathBuf,

    /// Directory basenames never descended into
    pub exclude_dirs: Vec<String>,

    /// File extensions eligible for reference extraction
    pub extensions: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Output format (json, text, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress the log channel entirely
    pub quiet: bool,

    /// Whether to print a line for every file read
    pub verbose: bool,

    /// Whether to show a spinner while scanning
    pub show_progress: bool,

    /// Whether to use colors in text output and log lines
    pub use_colors: bool,

    /// Worker threads used for the scan
    pub threads: usize,

    /// Whether a file contributes at most one entry per distinct module
    pub dedupe_per_file: bool,
}

impl Settings {
    /// Build the traversal policy described by these settings
    pub fn policy(&self) -> TraversalPolicy {
        TraversalPolicy::new(self.exclude_dirs.iter().cloned(), self.extensions.iter().cloned())
            .with_max_depth(self.max_depth)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::new(),
            exclude_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            max_depth: None,
            output_format: OutputFormat::Json,
            output_file: None,
            quiet: false,
            verbose: false,
            show_progress: true,
            use_colors: true,
            threads: num_cpus::get(),
            dedupe_per_file: false,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON object, module to files
    Json,
    /// Human-readable text output
    Text,
    /// CSV rows of module and file
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub exclude_dirs: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub show_progress: Option<bool>,
    pub use_colors: Option<bool>,
    pub threads: Option<usize>,
    pub dedupe_per_file: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.exclude_dirs.is_some() {
            self.exclude_dirs = other.exclude_dirs;
        }
        if other.extensions.is_some() {
            self.extensions = other.extensions;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.threads.is_some() {
            self.threads = other.threads;
        }
        if other.dedupe_per_file.is_some() {
            self.dedupe_per_file = other.dedupe_per_file;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scan_path) = &self.scan_path {
            settings.scan_path = scan_path.clone();
        }
        if let Some(exclude_dirs) = &self.exclude_dirs {
            settings.exclude_dirs = exclude_dirs.clone();
        }
        if let Some(extensions) = &self.extensions {
            settings.extensions = extensions.clone();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(threads) = self.threads {
            settings.threads = threads;
        }
        if let Some(dedupe_per_file) = self.dedupe_per_file {
            settings.dedupe_per_file = dedupe_per_file;
        }

        settings
    }
}
