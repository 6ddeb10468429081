//! Free Mobile SMS renderer
//!
//! Owns the credential gate, the setup operation and the event adapter on
//! top of [`SmsService`].

use super::renderer::AlertRenderer;
use crate::config::ConfigStore;
use crate::domain::{AlertEvent, Credentials};
use crate::error::{AppError, SendError, TransportError};
use crate::http::{HttpTransport, ReqwestTransport};
use crate::services::SmsService;

/// Message sent by [`AlertRenderer::test`]
pub const TEST_MESSAGE: &str = "Hello this is Cleep";

/// Renderer name
pub const RENDERER_NAME: &str = "freemobilesms";

/// Alert renderer delivering SMS through Free Mobile
pub struct FreeMobileSms<S: ConfigStore, T: HttpTransport> {
    store: S,
    service: SmsService<T>,
}

impl<S: ConfigStore> FreeMobileSms<S, ReqwestTransport> {
    /// Create a renderer using the default HTTP client and endpoint
    pub fn with_store(store: S) -> Result<Self, TransportError> {
        Ok(Self::new(store, SmsService::new(ReqwestTransport::new()?)))
    }
}

impl<S: ConfigStore, T: HttpTransport> FreeMobileSms<S, T> {
    /// Create a renderer from its parts
    pub fn new(store: S, service: SmsService<T>) -> Self {
        Self { store, service }
    }

    /// Configuration store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve persisted credentials
    ///
    /// Fails with [`SendError::MissingCredentials`] when either field is
    /// absent or empty. Never touches the network.
    pub fn credentials(&self) -> Result<Credentials, SendError> {
        let config = self.store.load().map_err(|e| {
            log::error!("Unable to read configuration: {}", e);
            SendError::Internal(e.to_string())
        })?;

        Credentials::from_config(&config).ok_or(SendError::MissingCredentials)
    }

    /// Validate and persist credentials
    ///
    /// Nothing is written when validation fails.
    pub fn set_credentials(
        &self,
        userid: Option<&str>,
        apikey: Option<&str>,
    ) -> Result<Credentials, AppError> {
        let credentials = Credentials::new(userid, apikey)?;
        self.store.update(&credentials.to_config())?;
        log::debug!("Credentials updated for user {}", credentials.userid());

        Ok(credentials)
    }

    /// Send a message, surfacing failures to the caller
    pub fn send_sms(&self, message: &str) -> Result<(), SendError> {
        let credentials = self.credentials()?;

        self.service.send(&credentials, message).map_err(|e| {
            log::error!("Error sending SMS: {}", e.detail());
            e
        })?;

        log::info!("SMS sent successfully");
        Ok(())
    }
}

impl<S: ConfigStore, T: HttpTransport> AlertRenderer for FreeMobileSms<S, T> {
    fn name(&self) -> &str {
        RENDERER_NAME
    }

    fn on_alert_event(&self, event: &AlertEvent) -> bool {
        let credentials = match self.credentials() {
            Ok(credentials) => credentials,
            Err(SendError::MissingCredentials) => {
                log::warn!("Unable to send SMS because credentials are not configured");
                return false;
            }
            Err(e) => {
                log::error!("Unable to send SMS: {}", e.detail());
                return false;
            }
        };

        match self.service.send(&credentials, event.message_or_default()) {
            Ok(()) => {
                log::info!("SMS sent successfully");
                true
            }
            Err(e) => {
                log::error!("Unable to send SMS: {}", e.detail());
                false
            }
        }
    }

    fn test(&self) -> Result<(), SendError> {
        self.send_sms(TEST_MESSAGE)
    }
}
