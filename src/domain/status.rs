//! SMS API response status
//!
//! The API answers with a bare HTTP status code; this maps it to its meaning.

use serde::Serialize;
use std::fmt;

/// Outcome reported by the SMS API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApiStatus {
    /// 200: message sent
    Sent,
    /// 400: a query parameter is missing
    MissingParameter,
    /// 402: too many SMS sent in too little time
    LimitReached,
    /// 403: the notification option is disabled on the account, or bad credentials
    ServiceNotEnabled,
    /// 500: server side failure
    ServerError,
    /// Anything else
    Unknown(u16),
}

impl ApiStatus {
    /// Map an HTTP status code
    pub fn from_code(code: u16) -> Self {
        match code {
            200 => ApiStatus::Sent,
            400 => ApiStatus::MissingParameter,
            402 => ApiStatus::LimitReached,
            403 => ApiStatus::ServiceNotEnabled,
            500 => ApiStatus::ServerError,
            other => ApiStatus::Unknown(other),
        }
    }

    /// Only 200 means the SMS went out
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiStatus::Sent)
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiStatus::Sent => write!(f, "Message sent"),
            ApiStatus::MissingParameter => write!(f, "Missing parameter"),
            ApiStatus::LimitReached => write!(f, "SMS limit reached"),
            ApiStatus::ServiceNotEnabled => write!(f, "Service not enabled"),
            ApiStatus::ServerError => write!(f, "Server error"),
            ApiStatus::Unknown(code) => write!(f, "Unknown error [{}]", code),
        }
    }
}
