//! Domain models for freesms
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod alert;
pub mod credentials;
pub mod status;

pub use alert::{AlertEvent, ALERT_EVENT_NAME, ALERT_PROFILE, DEFAULT_MESSAGE};
pub use credentials::{mask, Credentials, USERID_LENGTH};
pub use status::ApiStatus;
