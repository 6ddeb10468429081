//! Render command implementation
//!
//! Pushes an alert event through the dispatcher, as the host bus would.

use crate::alerts::AlertDispatcher;
use crate::cli::args::{OutputFormat, RenderArgs};
use crate::cli::output::{print_output, Message};
use crate::domain::{AlertEvent, ALERT_EVENT_NAME};
use crate::error::{AppError, ConfigError, Result};

use std::io::Read;

use super::FileRenderer;

/// Execute the render command
///
/// Missing credentials are reported as such rather than as an undelivered alert.
pub fn run_render(renderer: FileRenderer, args: &RenderArgs, format: OutputFormat) -> Result<()> {
    renderer.credentials()?;

    let params = match &args.event {
        Some(source) => read_params(source)?,
        None => serde_json::to_value(AlertEvent {
            subject: args.subject.clone(),
            message: args.message.clone(),
            attachment: args.attachment.clone(),
            timestamp: args.timestamp,
        })
        .map_err(ConfigError::from)?,
    };

    let mut dispatcher = AlertDispatcher::new();
    dispatcher.register(Box::new(renderer));

    let delivered = dispatcher.dispatch_raw(ALERT_EVENT_NAME, &params)?;
    if delivered == 0 {
        return Err(AppError::AlertNotSent);
    }

    print_output(
        &Message {
            message: "SMS sent successfully".to_string(),
            success: true,
        },
        format,
    )?;

    Ok(())
}

fn read_params(source: &str) -> Result<serde_json::Value> {
    let content = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(source)?
    };

    Ok(serde_json::from_str(&content).map_err(ConfigError::from)?)
}
