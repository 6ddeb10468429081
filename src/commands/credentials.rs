//! Credential commands
//!
//! Stores and shows the API credentials.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, CredentialsStatus, Message};
use crate::config::{ConfigStore, FileConfigStore};
use crate::domain::mask;
use crate::error::Result;

use super::FileRenderer;

/// Execute the set-credentials command
pub fn run_set_credentials(
    renderer: &FileRenderer,
    userid: &str,
    apikey: &str,
    format: OutputFormat,
) -> Result<()> {
    let credentials = renderer.set_credentials(Some(userid), Some(apikey))?;

    print_output(
        &Message {
            message: format!(
                "Credentials saved for user {} in {}",
                credentials.userid(),
                renderer.store().path().display()
            ),
            success: true,
        },
        format,
    )?;

    Ok(())
}

/// Execute the show command
pub fn run_show(store: &FileConfigStore, format: OutputFormat) -> Result<()> {
    let config = store.load()?;

    let status = CredentialsStatus {
        config_path: store.path().display().to_string(),
        configured: config.has_credentials(),
        userid: config.userid.clone(),
        apikey: config.apikey.as_deref().map(mask),
    };

    print_output(&status, format)?;
    Ok(())
}
