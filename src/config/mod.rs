//! Configuration system
//!
//! Handles the TOML credential file and the stores it is persisted through.

pub mod file;
pub mod store;

pub use file::FileConfigStore;
pub use store::{ConfigStore, MemoryConfigStore};

use serde::{Deserialize, Serialize};

/// Persisted configuration
///
/// Holds exactly the two credential fields, both absent by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Free Mobile user id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub userid: Option<String>,
    /// Notification API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
}

impl Config {
    /// Whether both credential fields are filled
    pub fn has_credentials(&self) -> bool {
        matches!(
            (self.userid.as_deref(), self.apikey.as_deref()),
            (Some(u), Some(k)) if !u.is_empty() && !k.is_empty()
        )
    }
}
