//! Trait definitions for HTTP operations
//!
//! These traits abstract over the HTTP client to enable testing with mocks.

use crate::error::TransportError;
use std::time::Duration;
use url::Url;

/// Trait for issuing HTTP requests
///
/// The SMS API only reports through the status code, so a transport
/// returns the code and drops the body.
pub trait HttpTransport: Send + Sync {
    /// Issue a GET request and return the response status code
    fn get(&self, url: &Url, timeout: Duration) -> Result<u16, TransportError>;
}
