//! freesms - Free Mobile SMS alert renderer
//!
//! This library forwards alert events to the account owner's phone through
//! the Free Mobile personal notification API.
//!
//! # Modules
//!
//! - [`alerts`]: Renderer contract, Free Mobile renderer and dispatcher
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`http`]: HTTP abstraction layer
//! - [`module`]: Module metadata
//! - [`services`]: SMS sending service

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod module;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use alerts::{AlertDispatcher, AlertRenderer, FreeMobileSms};
pub use error::{AppError, Result};
