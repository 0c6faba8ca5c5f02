//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML configuration file,
//! then `DEPWALK_*` environment variables, then command-line arguments.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::cli::Args;
use crate::error::{Result, ScanError};
use crate::models::config::{PartialSettings, Settings};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig};
pub use parser::{
    create_default_config, find_default_config, parse_config_content, parse_config_file,
};
pub use settings::SettingsValidator;

/// Prefix of the environment variables read by [`load_config`]
pub const ENV_PREFIX: &str = "DEPWALK";

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;
}

/// Configuration builder for merging multiple sources
#[derive(Debug)]
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if source.is_available() {
            let partial = source.load()?;
            Ok(self.merge(partial))
        } else {
            Ok(self)
        }
    }

    /// Add configuration from a file that must exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        if !file_config.is_available() {
            return Err(ScanError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        self.load_from(&file_config)
    }

    /// Add configuration from the default config file locations, if one exists
    pub fn add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(default_config) => Ok(self.merge(default_config)),
            None => Ok(self),
        }
    }

    /// Build the final settings with validation.
    ///
    /// When no source named a scan path the current directory is scanned.
    pub fn build(self) -> Result<Settings> {
        let mut settings = self.partial.to_settings();

        if settings.scan_path.as_os_str().is_empty() {
            settings.scan_path = std::env::current_dir().map_err(ScanError::io_error)?;
        }

        SettingsValidator::validate(&settings)?;

        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(args: &Args) -> Result<Settings> {
    load_config_with_env_prefix(args, ENV_PREFIX)
}

/// Load configuration reading environment variables with a custom prefix
pub fn load_config_with_env_prefix(args: &Args, env_prefix: &str) -> Result<Settings> {
    let cli_config = CliConfig::from_args(args);

    let builder = match cli_config.config_path() {
        Some(path) => ConfigBuilder::new().add_config_file(path)?,
        None => ConfigBuilder::new().add_default_config_file()?,
    };

    builder
        .load_from(&EnvConfig::new(env_prefix))?
        .load_from(&cli_config)?
        .build()
}
