//! Alert dispatching
//!
//! Routes alert events from the host bus to every registered renderer.

use super::renderer::AlertRenderer;
use crate::domain::{AlertEvent, ALERT_EVENT_NAME, ALERT_PROFILE};
use crate::error::{DomainError, SendError};

/// Dispatcher holding renderers registered by composition
#[derive(Default)]
pub struct AlertDispatcher {
    renderers: Vec<Box<dyn AlertRenderer>>,
}

impl AlertDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Register a renderer
    pub fn register(&mut self, renderer: Box<dyn AlertRenderer>) {
        log::debug!("Registered renderer {}", renderer.name());
        self.renderers.push(renderer);
    }

    /// Get number of registered renderers
    pub fn renderer_count(&self) -> usize {
        self.renderers.len()
    }

    /// Render an alert through every renderer accepting alert profiles
    ///
    /// Returns how many renderers delivered it.
    pub fn dispatch(&self, event: &AlertEvent) -> usize {
        let mut delivered = 0;
        for renderer in self.alert_renderers() {
            if renderer.on_alert_event(event) {
                delivered += 1;
            } else {
                log::warn!("Renderer {} did not deliver alert", renderer.name());
            }
        }
        delivered
    }

    /// Decode and dispatch a raw event from the host bus
    pub fn dispatch_raw(
        &self,
        event_name: &str,
        params: &serde_json::Value,
    ) -> Result<usize, DomainError> {
        if event_name != ALERT_EVENT_NAME {
            return Err(DomainError::UnsupportedEvent(event_name.to_string()));
        }

        let event = AlertEvent::from_params(params)?;
        Ok(self.dispatch(&event))
    }

    /// Run the test operation of every renderer
    pub fn test_all(&self) -> Vec<(String, Result<(), SendError>)> {
        self.renderers
            .iter()
            .map(|r| (r.name().to_string(), r.test()))
            .collect()
    }

    fn alert_renderers(&self) -> impl Iterator<Item = &dyn AlertRenderer> {
        self.renderers
            .iter()
            .map(|r| &**r)
            .filter(|r| r.profiles().contains(&ALERT_PROFILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::FreeMobileSms;
    use crate::config::{Config, MemoryConfigStore};
    use crate::mock::MockTransport;
    use crate::services::SmsService;
    use serde_json::json;

    struct OtherProfileRenderer;

    impl AlertRenderer for OtherProfileRenderer {
        fn name(&self) -> &str {
            "display"
        }

        fn profiles(&self) -> &[&'static str] {
            &["DisplayMessageProfile"]
        }

        fn on_alert_event(&self, _event: &AlertEvent) -> bool {
            panic!("alert routed to a renderer without alert profile");
        }

        fn test(&self) -> Result<(), SendError> {
            Ok(())
        }
    }

    fn sms_renderer(status: u16, configured: bool) -> (Box<dyn AlertRenderer>, MockTransport) {
        let config = if configured {
            Config {
                userid: Some("useriddd".to_string()),
                apikey: Some("apikey".to_string()),
            }
        } else {
            Config::default()
        };
        let transport = MockTransport::with_status(status);
        let renderer = FreeMobileSms::new(
            MemoryConfigStore::new(config),
            SmsService::new(transport.clone()),
        );
        (Box::new(renderer), transport)
    }

    #[test]
    fn test_dispatcher_creation() {
        let dispatcher = AlertDispatcher::new();
        assert_eq!(dispatcher.renderer_count(), 0);
        assert_eq!(dispatcher.dispatch(&AlertEvent::default()), 0);
    }

    #[test]
    fn test_dispatch_counts_deliveries() {
        let mut dispatcher = AlertDispatcher::new();
        let (ok, ok_transport) = sms_renderer(200, true);
        let (rejected, _) = sms_renderer(402, true);
        let (unconfigured, idle_transport) = sms_renderer(200, false);
        dispatcher.register(ok);
        dispatcher.register(rejected);
        dispatcher.register(unconfigured);
        dispatcher.register(Box::new(OtherProfileRenderer));

        let delivered = dispatcher.dispatch(&AlertEvent::with_message("Intruder detected"));

        assert_eq!(dispatcher.renderer_count(), 4);
        assert_eq!(delivered, 1);
        assert_eq!(ok_transport.request_count(), 1);
        assert_eq!(idle_transport.request_count(), 0);
    }

    #[test]
    fn test_dispatch_raw() {
        let mut dispatcher = AlertDispatcher::new();
        let (renderer, transport) = sms_renderer(200, true);
        dispatcher.register(renderer);

        let delivered = dispatcher
            .dispatch_raw(
                "core.alert.send",
                &json!({"subject": "Alarm", "message": "Intruder detected"}),
            )
            .unwrap();

        assert_eq!(delivered, 1);
        assert!(transport.requests()[0]
            .as_str()
            .ends_with("msg=Intruder+detected"));
    }

    #[test]
    fn test_dispatch_raw_fractional_timestamp() {
        let mut dispatcher = AlertDispatcher::new();
        let (renderer, transport) = sms_renderer(200, true);
        dispatcher.register(renderer);

        let delivered = dispatcher
            .dispatch_raw(
                "core.alert.send",
                &json!({"message": "Intruder detected", "timestamp": 1_700_000_000.25}),
            )
            .unwrap();

        assert_eq!(delivered, 1);
        assert_eq!(transport.request_count(), 1);
    }

    #[test]
    fn test_dispatch_raw_rejects_other_events() {
        let dispatcher = AlertDispatcher::new();
        let result = dispatcher.dispatch_raw("core.device.update", &json!({}));
        assert_eq!(
            result,
            Err(DomainError::UnsupportedEvent("core.device.update".to_string()))
        );
    }

    #[test]
    fn test_test_all() {
        let mut dispatcher = AlertDispatcher::new();
        let (renderer, _) = sms_renderer(500, true);
        dispatcher.register(renderer);

        let results = dispatcher.test_all();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "freemobilesms");
        assert_eq!(
            results[0].1.as_ref().unwrap_err().to_string(),
            "Server error"
        );
    }
}
