//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod credentials;
pub mod info;
pub mod render;
pub mod send;

pub use credentials::{run_set_credentials, run_show};
pub use info::run_info;
pub use render::run_render;
pub use send::{run_send, run_test};

use crate::alerts::FreeMobileSms;
use crate::config::FileConfigStore;
use crate::error::Result;
use crate::http::ReqwestTransport;
use crate::services::SmsService;

/// Renderer backed by the configuration file and the real HTTP client
pub type FileRenderer = FreeMobileSms<FileConfigStore, ReqwestTransport>;

/// Build the renderer from CLI overrides
pub fn build_renderer(config: Option<&str>, endpoint: Option<&str>) -> Result<FileRenderer> {
    let store = FileConfigStore::from_option(config);
    log::debug!("Using configuration {}", store.path().display());

    let mut service = SmsService::new(ReqwestTransport::new()?);
    if let Some(endpoint) = endpoint {
        service = service.with_endpoint(endpoint);
        log::info!("Using SMS endpoint {}", service.endpoint());
    }

    Ok(FreeMobileSms::new(store, service))
}
