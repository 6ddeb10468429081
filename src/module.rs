//! Module metadata
//!
//! Static description a host shows in its application catalog.

use crate::domain::ALERT_PROFILE;
use serde::Serialize;

/// Catalog description of this module
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub price: f32,
    pub category: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tags: &'static [&'static str],
    pub country: &'static str,
    pub url_info: &'static str,
    pub url_site: &'static str,
    pub url_bugs: &'static str,
    pub profiles: &'static [&'static str],
    pub config_file: &'static str,
}

/// Metadata of the Free Mobile SMS module
pub const MODULE_INFO: ModuleInfo = ModuleInfo {
    name: crate::alerts::RENDERER_NAME,
    version: env!("CARGO_PKG_VERSION"),
    author: "Cleep",
    price: 0.0,
    category: "SERVICE",
    description: "Sends you SMS alerts using french Freemobile provider.",
    long_description: "French Freemobile telecom provider gives a way to send to you (and only you) \
        freely SMS using your account. Configure this application and your device will \
        be able to send you some message directly on your mobile.",
    tags: &["sms", "alert", "freemobile"],
    country: "fr",
    url_info: "https://mobile.free.fr/",
    url_site: "https://github.com/CleepDevice/cleepapp-freemobilesms",
    url_bugs: "https://github.com/CleepDevice/cleepapp-freemobilesms/issues",
    profiles: &[ALERT_PROFILE],
    config_file: crate::config::file::CONFIG_FILE_NAME,
};
