//! SMS sending service
//!
//! Builds the authenticated request URL, issues the GET and maps the status.

use crate::domain::{ApiStatus, Credentials};
use crate::error::{SendError, TransportError};
use crate::http::HttpTransport;
use std::time::Duration;
use url::Url;

/// Free Mobile notification endpoint
pub const API_URL: &str = "https://smsapi.free-mobile.fr/sendmsg";

/// Timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Service sending SMS through the notification API
#[derive(Debug, Clone)]
pub struct SmsService<T: HttpTransport> {
    transport: T,
    endpoint: String,
    timeout: Duration,
}

impl<T: HttpTransport> SmsService<T> {
    /// Create a service targeting the public endpoint
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            endpoint: API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the endpoint (local relay, tests)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request URL
    ///
    /// Parameters are form encoded, so spaces become `+`.
    pub fn request_url(
        &self,
        credentials: &Credentials,
        message: &str,
    ) -> Result<Url, TransportError> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("user", credentials.userid()),
                ("pass", credentials.apikey()),
                ("msg", message),
            ],
        )
        .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", self.endpoint, e)))
    }

    /// Send a message, making exactly one request
    ///
    /// Failures are returned without being logged.
    pub fn send(&self, credentials: &Credentials, message: &str) -> Result<(), SendError> {
        let url = self.request_url(credentials, message)?;

        log::debug!(
            "Request {} (user={}, pass={}, msg={:?})",
            self.endpoint,
            credentials.userid(),
            credentials.masked_apikey(),
            message
        );

        let code = self.transport.get(&url, self.timeout)?;
        log::debug!("Request response status: {}", code);

        let status = ApiStatus::from_code(code);
        if !status.is_success() {
            return Err(SendError::Rejected {
                status: code,
                reason: status.to_string(),
            });
        }

        Ok(())
    }
}
