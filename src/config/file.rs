//! File and environment configuration sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, ScanError};
use crate::models::config::{OutputFormat, PartialSettings};

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ScanError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
}

const ENV_KEYS: &[&str] = &[
    "SCAN_PATH",
    "EXCLUDE",
    "EXTENSIONS",
    "MAX_DEPTH",
    "OUTPUT_FORMAT",
    "THREADS",
    "QUIET",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn parse_number(&self, key: &str) -> Result<Option<usize>> {
        match self.var(key) {
            Some(value) => value.trim().parse().map(Some).map_err(|_| {
                ScanError::config_error(format!(
                    "{}_{} must be a positive number, got '{}'",
                    self.prefix, key, value
                ))
            }),
            None => Ok(None),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("SCAN_PATH") {
            settings.scan_path = Some(PathBuf::from(path));
        }

        if let Some(exclude) = self.var("EXCLUDE") {
            settings.exclude_dirs = Some(split_list(&exclude));
        }

        if let Some(extensions) = self.var("EXTENSIONS") {
            settings.extensions = Some(split_list(&extensions));
        }

        settings.max_depth = self.parse_number("MAX_DEPTH")?;
        settings.threads = self.parse_number("THREADS")?;

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            settings.output_format = Some(
                format
                    .parse::<OutputFormat>()
                    .map_err(ScanError::config_error)?,
            );
        }

        if let Some(quiet) = self.var("QUIET") {
            settings.quiet = Some(parse_flag(&quiet).ok_or_else(|| {
                ScanError::config_error(format!(
                    "{}_QUIET must be true or false, got '{}'",
                    self.prefix, quiet
                ))
            })?);
        }

        parser::validate_partial_settings(&settings, format!("{} environment", self.prefix))?;

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(".git, node_modules,,vendor "),
            vec![".git", "node_modules", "vendor"]
        );
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_env_config_reads_prefixed_variables() {
        // Unique prefix so parallel tests do not observe each other
        let prefix = "DEPWALK_TEST_ENV_READ";
        std::env::set_var(format!("{}_EXCLUDE", prefix), "dist,build");
        std::env::set_var(format!("{}_THREADS", prefix), "3");
        std::env::set_var(format!("{}_QUIET", prefix), "yes");

        let env = EnvConfig::new(prefix);
        assert!(env.is_available());
        let settings = env.load().unwrap();

        assert_eq!(settings.exclude_dirs, Some(vec!["dist".to_string(), "build".to_string()]));
        assert_eq!(settings.threads, Some(3));
        assert_eq!(settings.quiet, Some(true));
        assert_eq!(settings.scan_path, None);
    }

    #[test]
    fn test_env_config_rejects_bad_number() {
        let prefix = "DEPWALK_TEST_ENV_BAD";
        std::env::set_var(format!("{}_MAX_DEPTH", prefix), "deep");

        let err = EnvConfig::new(prefix).load().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_env_config_unavailable_without_variables() {
        assert!(!EnvConfig::new("DEPWALK_TEST_ENV_NONE").is_available());
    }

    #[test]
    fn test_file_config_unavailable_when_missing() {
        let config = FileConfig::with_path("/definitely/not/here.toml");
        assert!(!config.is_available());
        assert!(matches!(config.load(), Err(ScanError::ConfigNotFound { .. })));
    }
}
