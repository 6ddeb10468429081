//! Service layer
//!
//! Services encapsulate the business logic of talking to the SMS API.

pub mod sms_service;

pub use sms_service::{SmsService, API_URL, REQUEST_TIMEOUT};
