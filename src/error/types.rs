//! Error types and definitions for depwalk
//!
//! Errors fall into four classes: configuration errors (fatal, raised before any
//! traversal), traversal errors (a directory cannot be listed), read errors (a file
//! cannot be read as text) and extraction errors (file content cannot be parsed).
//! The remaining variants cover configuration files, output and the worker pool.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for depwalk operations
#[derive(Debug, Error)]
pub enum ScanError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Generic configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// No scan target was supplied (empty path)
    #[error("No scan target given")]
    MissingTarget,

    /// Scan target is not an absolute path
    #[error("Scan target must be an absolute path: {path}")]
    RelativeTarget { path: PathBuf },

    /// Scan target does not exist
    #[error("Scan target not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// Scan target exists but is not a directory
    #[error("Scan target is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A directory could not be listed
    #[error("Directory traversal error for {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be read as text
    #[error("Error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's content could not be parsed for module references
    #[error("Cannot extract references from {path}: {message}")]
    Extraction { path: PathBuf, message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// Worker pool could not be created
    #[error("Thread pool error: {source}")]
    ThreadPool {
        #[source]
        source: rayon::ThreadPoolBuildError,
    },

    /// Error wrapped with a context message
    #[error("{message}")]
    Context { message: String },
}

impl ScanError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Isolated per file or per subtree
            ScanError::Traversal { .. } => ErrorSeverity::Warning,
            ScanError::Read { .. } => ErrorSeverity::Warning,
            ScanError::Extraction { .. } => ErrorSeverity::Warning,

            ScanError::Config { .. } => ErrorSeverity::Critical,
            ScanError::MissingTarget => ErrorSeverity::Critical,
            ScanError::RelativeTarget { .. } => ErrorSeverity::Critical,
            ScanError::TargetNotFound { .. } => ErrorSeverity::Critical,
            ScanError::NotADirectory { .. } => ErrorSeverity::Critical,
            ScanError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ScanError::ConfigRead { .. } => ErrorSeverity::Critical,
            ScanError::ConfigParse { .. } => ErrorSeverity::Critical,
            ScanError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Check if this error belongs to the configuration class
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ScanError::Config { .. }
                | ScanError::MissingTarget
                | ScanError::RelativeTarget { .. }
                | ScanError::TargetNotFound { .. }
                | ScanError::NotADirectory { .. }
                | ScanError::ConfigNotFound { .. }
                | ScanError::ConfigRead { .. }
                | ScanError::ConfigParse { .. }
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ScanError::MissingTarget => "No directory to scan was given. \
                Pass a directory path or set scan_path in the configuration."
                .to_string(),
            ScanError::RelativeTarget { path } => format!(
                "'{}' is not an absolute path. Provide the full path of the directory to scan.",
                path.display()
            ),
            ScanError::TargetNotFound { path } => {
                format!("'{}' does not exist. Check the path and try again.", path.display())
            }
            ScanError::NotADirectory { path } => format!(
                "'{}' is not a directory. A directory is required as the scan target.",
                path.display()
            ),
            ScanError::Traversal { path, source } => {
                if source.kind() == std::io::ErrorKind::PermissionDenied {
                    format!(
                        "Cannot list '{}' due to permission denied. Skipping directory.",
                        path.display()
                    )
                } else {
                    format!("Cannot list '{}': {}. Skipping directory.", path.display(), source)
                }
            }
            ScanError::Read { path, source } => {
                format!("Cannot read '{}': {}. Skipping file.", path.display(), source)
            }
            ScanError::Extraction { path, message } => {
                format!("Cannot parse '{}': {}. Skipping file.", path.display(), message)
            }
            ScanError::ConfigNotFound { path } => format!(
                "Configuration file not found at '{}'. \
                Create one with --init or drop the --config option.",
                path.display()
            ),
            ScanError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ScanError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ScanError::Config {
            message: message.into(),
        }
    }

    /// Create a traversal error for a directory that could not be listed
    pub fn traversal_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Traversal {
            path: path.into(),
            source,
        }
    }

    /// Create a read error for a file
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create an extraction error attributed to a file
    pub fn extraction_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::Extraction {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::io_error(err)
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        ScanError::JsonSerialize { source: err }
    }
}

impl From<csv::Error> for ScanError {
    fn from(err: csv::Error) -> Self {
        ScanError::Csv { source: err }
    }
}

impl From<rayon::ThreadPoolBuildError> for ScanError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        ScanError::ThreadPool { source: err }
    }
}

/// Result type alias for depwalk operations
pub type Result<T> = std::result::Result<T, ScanError>;
