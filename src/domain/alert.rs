//! Alert event types
//!
//! Alert events are emitted by the host event bus and rendered by this crate
//! as SMS.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Event name carrying alerts on the host bus
pub const ALERT_EVENT_NAME: &str = "core.alert.send";

/// Profile name of alert payloads
pub const ALERT_PROFILE: &str = "AlertProfile";

/// Message used when an event carries none
pub const DEFAULT_MESSAGE: &str = "No message";

/// Alert event payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertEvent {
    /// Alert subject
    pub subject: Option<String>,
    /// Alert body
    pub message: Option<String>,
    /// Attachment path or reference (not forwarded by SMS)
    pub attachment: Option<String>,
    /// Unix timestamp in seconds, possibly fractional
    pub timestamp: Option<f64>,
}

impl AlertEvent {
    /// Create an event carrying only a message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Decode raw event parameters
    ///
    /// Only `subject`, `message`, `attachment` and `timestamp` are accepted.
    pub fn from_params(params: &serde_json::Value) -> Result<Self, DomainError> {
        if params.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(params).map_err(|e| DomainError::InvalidEvent(e.to_string()))
    }

    /// Message to send, falling back to a placeholder
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_MESSAGE)
    }
}
