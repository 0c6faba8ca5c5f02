//! Settings validation

use std::path::Path;

use crate::error::{Result, ScanError};
use crate::models::config::Settings;
use crate::models::target::ScanTarget;

/// Settings validator for ensuring configuration is valid before a scan
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return the first configuration error found
    pub fn validate(settings: &Settings) -> Result<()> {
        ScanTarget::new(&settings.scan_path)?;

        if settings.threads == 0 {
            return Err(ScanError::config_error("threads must be at least 1"));
        }

        if settings.max_depth == Some(0) {
            return Err(ScanError::config_error("max_depth must be at least 1"));
        }

        for name in &settings.exclude_dirs {
            if name.trim().is_empty() {
                return Err(ScanError::config_error("exclude_dirs cannot contain empty names"));
            }
            // Matched against a single path component
            if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
                return Err(ScanError::config_error(format!(
                    "exclude_dirs entry '{}' must be a directory name, not a path",
                    name
                )));
            }
        }

        for extension in &settings.extensions {
            if extension.trim_start_matches('.').trim().is_empty() {
                return Err(ScanError::config_error("extensions cannot contain empty entries"));
            }
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The output file's directory must already exist
    fn validate_output_path(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(ScanError::config_error(format!(
                    "output directory '{}' does not exist",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }
}
