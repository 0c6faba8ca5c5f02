//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// depwalk - static inventory of JavaScript module references
#[derive(Parser, Debug)]
#[command(name = "depwalk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "List every module referenced by the JavaScript files in a directory tree")]
#[command(long_about = "depwalk walks a directory tree, statically extracts the module references \
(ES module imports and re-exports, CommonJS require, AMD define/require) from every eligible file, \
and prints a mapping from each referenced module to the files that reference it. \
Nothing is executed and no module is resolved.")]
#[command(after_help = "EXAMPLES:

    # Scan the current directory
    depwalk

    # Scan a specific directory, printing only the index
    depwalk /srv/app --quiet

    # Also read CommonJS and JSX files
    depwalk --ext js --ext mjs --ext cjs --ext jsx

    # Skip additional directories
    depwalk --exclude .git --exclude node_modules --exclude dist

    # Human-readable or CSV output, optionally to a file
    depwalk --output text
    depwalk --output csv --output-file deps.csv

    # Create a default .depwalk.toml in the current directory
    depwalk --init
")]
pub struct Args {
    /// Directory to scan
    #[arg(
        value_name = "PATH",
        help = "Directory to scan (defaults to the current directory; relative paths are resolved against it)",
    )]
    pub path: Option<PathBuf>,

    /// Directory names to skip
    #[arg(
        short,
        long,
        value_name = "NAME",
        help = "Directory name never descended into, matched exactly (repeatable; replaces the default .git and node_modules)",
    )]
    pub exclude: Vec<String>,

    /// File extensions to read
    #[arg(
        short = 'x',
        long = "ext",
        value_name = "EXT",
        help = "File extension to read for references (repeatable; replaces the default js and mjs)",
    )]
    pub extensions: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(
        long,
        value_name = "DEPTH",
        help = "Maximum directory depth to traverse below the scan root",
    )]
    pub max_depth: Option<usize>,

    /// Output format (json, text, csv)
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMAT",
        help = "Output format for the index (default: json)",
    )]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(
        long,
        value_name = "FILE",
        help = "File to write the index to (uses stdout if not specified)",
    )]
    pub output_file: Option<PathBuf>,

    /// Suppress all log output
    #[arg(short, long, help = "Suppress progress and summary output; only the index is printed")]
    pub quiet: bool,

    /// Log every file as it is read
    #[arg(short, long, help = "Print a line for every file as it is read")]
    pub verbose: bool,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (defaults to .depwalk.toml in the current directory)",
    )]
    pub config: Option<PathBuf>,

    /// Worker threads
    #[arg(
        short = 'j',
        long,
        value_name = "N",
        help = "Number of worker threads (defaults to the number of CPUs)",
    )]
    pub threads: Option<usize>,

    /// Count each module once per file
    #[arg(
        long,
        help = "List a file at most once per referenced module, even if it references the module repeatedly",
    )]
    pub dedupe: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner (useful for CI environments)")]
    pub no_progress: bool,

    /// Initialize a default configuration file
    #[arg(
        long,
        help = "Create a default configuration file (.depwalk.toml) in the current directory",
    )]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object mapping each module to its files
    Json,
    /// Human-readable text output
    Text,
    /// CSV rows of module and file
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
