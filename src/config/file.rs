//! Configuration file handling
//!
//! Loads and saves the credential file as TOML.

use super::{Config, ConfigStore};
use crate::error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

/// File name of the credential file
pub const CONFIG_FILE_NAME: &str = "freesms.toml";

/// TOML file backed configuration store
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    /// Create a store for the given file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store at the explicit path, or the default one
    pub fn from_option(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::new(p),
            None => Self::new(Self::default_path()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get default configuration file path
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("freesms").join(CONFIG_FILE_NAME)
        } else {
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            log::debug!(
                "No configuration at {}, using defaults",
                self.path.display()
            );
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::ReadFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    fn update(&self, config: &Config) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        let write_failed = |e: std::io::Error| ConfigError::WriteFailed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_failed)?;
            }
        }
        fs::write(&self.path, content).map_err(write_failed)?;

        log::info!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}
