//! Send commands
//!
//! Sends a test or custom SMS, reporting failures to the user.

use crate::alerts::{AlertRenderer, TEST_MESSAGE};
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, Message};
use crate::error::Result;

use super::FileRenderer;

/// Execute the test command
pub fn run_test(renderer: &FileRenderer, format: OutputFormat) -> Result<()> {
    renderer.test()?;

    print_output(
        &Message {
            message: format!("Test SMS sent (\"{}\")", TEST_MESSAGE),
            success: true,
        },
        format,
    )?;

    Ok(())
}

/// Execute the send command
pub fn run_send(renderer: &FileRenderer, message: &str, format: OutputFormat) -> Result<()> {
    renderer.send_sms(message)?;

    print_output(
        &Message {
            message: "SMS sent".to_string(),
            success: true,
        },
        format,
    )?;

    Ok(())
}
