//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt, ScanError};
use crate::models::config::PartialSettings;

/// Default configuration file name, looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = ".depwalk.toml";

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScanError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ScanError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| ScanError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(ScanError::config_error(format!(
                "Invalid empty scan_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(names) = &settings.exclude_dirs {
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(ScanError::config_error(format!(
                "Empty exclude_dirs entry in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(extensions) = &settings.extensions {
        if extensions.iter().any(|ext| ext.trim().trim_start_matches('.').is_empty()) {
            return Err(ScanError::config_error(format!(
                "Empty extensions entry in config file: {}",
                path.display()
            )));
        }
    }

    if settings.max_depth == Some(0) {
        return Err(ScanError::config_error(format!(
            "Invalid max_depth 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if settings.threads == Some(0) {
        return Err(ScanError::config_error(format!(
            "Invalid threads 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ScanError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Path of the per-user configuration file, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("depwalk").join("config.toml"))
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let current_dir_config = PathBuf::from(DEFAULT_CONFIG_FILE);
    if current_dir_config.is_file() {
        return Ok(Some(parse_config_file(current_dir_config)?));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            return Ok(Some(parse_config_file(user_config)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create configuration directory {}", parent.display())
            })?;
        }
    }

    fs::write(path, include_str!("default_config.toml"))
        .with_context(|| format!("Failed to write configuration file {}", path.display()))?;

    Ok(())
}
