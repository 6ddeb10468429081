//! Unified error types for freesms
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from parameter or event validation
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Error from sending an SMS
    #[error("{0}")]
    Send(#[from] SendError),

    /// Error from the HTTP layer
    #[error("HTTP error: {0}")]
    Transport(#[from] TransportError),

    /// An alert event was rendered but no SMS went out
    #[error("Alert was not sent (see logs)")]
    AlertNotSent,

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parameter and event validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required parameter not provided
    #[error("Parameter \"{0}\" is missing")]
    MissingParameter(String),

    /// Parameter provided with an unusable value
    #[error("Parameter \"{name}\" is invalid (specified=\"{value}\")")]
    InvalidParameter { name: String, value: String },

    /// User id does not have the expected length
    #[error("Userid must be 8 characters long")]
    InvalidUserId,

    /// Event name not handled by this renderer
    #[error("Unsupported event: {0}")]
    UnsupportedEvent(String),

    /// Event parameters could not be decoded
    #[error("Invalid event parameters: {0}")]
    InvalidEvent(String),
}

/// Errors from configuration parsing and persistence
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Unable to read configuration file {path}: {message}")]
    ReadFailed { path: String, message: String },

    /// Config file could not be written
    #[error("Unable to write configuration file {path}: {message}")]
    WriteFailed { path: String, message: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors from the HTTP transport
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Endpoint URL could not be built
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Request did not complete before the timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection, DNS or protocol failure
    #[error("Request failed: {0}")]
    Request(String),
}

/// Category of a failed send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendErrorKind {
    /// Credentials absent or unusable
    Configuration,
    /// Remote API answered with a non-200 status
    Rejected,
    /// Transport or internal failure
    Internal,
}

/// Errors from sending an SMS
///
/// The display text is what the end user sees. Internal details stay in
/// [`SendError::detail`] and the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// Credentials were never configured
    #[error("Please fill credentials first")]
    MissingCredentials,

    /// Remote API rejected the request
    #[error("{reason}")]
    Rejected { status: u16, reason: String },

    /// Transport or internal failure
    #[error("Internal error (see logs)")]
    Internal(String),
}

impl SendError {
    /// Error category
    pub fn kind(&self) -> SendErrorKind {
        match self {
            SendError::MissingCredentials => SendErrorKind::Configuration,
            SendError::Rejected { .. } => SendErrorKind::Rejected,
            SendError::Internal(_) => SendErrorKind::Internal,
        }
    }

    /// Full detail, including what the display text hides
    pub fn detail(&self) -> String {
        match self {
            SendError::Internal(detail) => detail.clone(),
            SendError::Rejected { status, reason } => format!("{} [{}]", reason, status),
            other => other.to_string(),
        }
    }
}

impl From<TransportError> for SendError {
    fn from(err: TransportError) -> Self {
        SendError::Internal(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        assert_eq!(
            DomainError::MissingParameter("userid".to_string()).to_string(),
            "Parameter \"userid\" is missing"
        );
        assert_eq!(
            DomainError::InvalidParameter {
                name: "apikey".to_string(),
                value: String::new(),
            }
            .to_string(),
            "Parameter \"apikey\" is invalid (specified=\"\")"
        );
        assert_eq!(
            DomainError::InvalidUserId.to_string(),
            "Userid must be 8 characters long"
        );
    }

    #[test]
    fn test_send_error_hides_internal_detail() {
        let err = SendError::Internal("connection refused".to_string());
        assert_eq!(err.to_string(), "Internal error (see logs)");
        assert_eq!(err.detail(), "connection refused");
        assert_eq!(err.kind(), SendErrorKind::Internal);
    }

    #[test]
    fn test_send_error_kinds() {
        assert_eq!(
            SendError::MissingCredentials.kind(),
            SendErrorKind::Configuration
        );

        let rejected = SendError::Rejected {
            status: 402,
            reason: "SMS limit reached".to_string(),
        };
        assert_eq!(rejected.kind(), SendErrorKind::Rejected);
        assert_eq!(rejected.to_string(), "SMS limit reached");
        assert_eq!(rejected.detail(), "SMS limit reached [402]");
    }

    #[test]
    fn test_transport_error_conversion() {
        let send_err: SendError = TransportError::Timeout.into();
        assert_eq!(send_err, SendError::Internal("Request timed out".to_string()));

        let app_err: AppError = send_err.into();
        assert!(matches!(app_err, AppError::Send(_)));
    }
}
