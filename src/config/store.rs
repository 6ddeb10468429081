//! Configuration stores
//!
//! Abstracts where credentials are persisted so the renderer can be driven
//! by a host-provided store or the local TOML file.

use super::Config;
use crate::error::ConfigError;
use std::sync::RwLock;

/// Trait for configuration persistence
pub trait ConfigStore: Send + Sync {
    /// Read the current configuration
    fn load(&self) -> Result<Config, ConfigError>;

    /// Replace the persisted configuration
    fn update(&self, config: &Config) -> Result<(), ConfigError>;
}

/// In-memory store, for embedding hosts that persist on their own
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: RwLock<Config>,
}

impl MemoryConfigStore {
    /// Create a store holding the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        // a poisoned lock still holds the last written config
        let guard = self.config.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn update(&self, config: &Config) -> Result<(), ConfigError> {
        let mut guard = self.config.write().unwrap_or_else(|e| e.into_inner());
        *guard = config.clone();
        Ok(())
    }
}
