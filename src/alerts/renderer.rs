//! Alert renderer contract
//!
//! A renderer turns alert events into a concrete delivery channel. Hosts
//! register renderers with an [`AlertDispatcher`](super::AlertDispatcher).

use crate::domain::{AlertEvent, ALERT_PROFILE};
use crate::error::SendError;

/// Renderer channel trait
pub trait AlertRenderer: Send + Sync {
    /// Renderer name for identification
    fn name(&self) -> &str;

    /// Profiles this renderer accepts
    fn profiles(&self) -> &[&'static str] {
        &[ALERT_PROFILE]
    }

    /// Render an alert event pushed by the host
    ///
    /// Never fails: problems are logged and reported as `false`.
    fn on_alert_event(&self, event: &AlertEvent) -> bool;

    /// Send a fixed test message, returning any failure to the caller
    fn test(&self) -> Result<(), SendError>;
}
