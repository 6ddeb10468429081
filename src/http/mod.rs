//! HTTP abstraction layer
//!
//! Provides trait-based abstractions over the HTTP client for testability.

pub mod client;
pub mod traits;

pub use client::ReqwestTransport;
pub use traits::HttpTransport;
