//! Mock implementations for testing
//!
//! Provides a recording HTTP transport for unit testing without network access.

use crate::error::TransportError;
use crate::http::HttpTransport;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// Mock HTTP transport
///
/// Answers every request with a fixed status (or error) and records the
/// requested URLs. Clones share the same request log.
#[derive(Debug, Clone)]
pub struct MockTransport {
    response: Result<u16, TransportError>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl MockTransport {
    /// Transport answering with the given status code
    pub fn with_status(status: u16) -> Self {
        Self {
            response: Ok(status),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Transport failing every request
    pub fn failing(error: TransportError) -> Self {
        Self {
            response: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// URLs requested so far
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests issued so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpTransport for MockTransport {
    fn get(&self, url: &Url, _timeout: Duration) -> Result<u16, TransportError> {
        self.requests.lock().unwrap().push(url.clone());
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_requests() {
        let transport = MockTransport::with_status(200);
        let shared = transport.clone();
        let url = Url::parse("http://localhost/sendmsg?msg=hi").unwrap();

        assert_eq!(transport.get(&url, Duration::from_secs(1)), Ok(200));
        assert_eq!(shared.request_count(), 1);
        assert_eq!(shared.requests()[0], url);
    }

    #[test]
    fn test_mock_failing() {
        let transport = MockTransport::failing(TransportError::Timeout);
        let url = Url::parse("http://localhost/sendmsg").unwrap();
        assert_eq!(
            transport.get(&url, Duration::from_secs(1)),
            Err(TransportError::Timeout)
        );
    }
}
