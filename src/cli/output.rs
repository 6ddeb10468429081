//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::module::ModuleInfo;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Stored credentials for display
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsStatus {
    pub config_path: String,
    pub configured: bool,
    pub userid: Option<String>,
    pub apikey: Option<String>,
}

impl TableDisplay for CredentialsStatus {
    fn to_table(&self) -> String {
        let unset = "(not set)";
        format!(
            "Configuration: {}\n  User id: {}\n  API key: {}\n  Ready: {}",
            self.config_path,
            self.userid.as_deref().unwrap_or(unset),
            self.apikey.as_deref().unwrap_or(unset),
            if self.configured { "yes" } else { "no" }
        )
    }

    fn to_compact(&self) -> String {
        format!(
            "{}:{}",
            self.userid.as_deref().unwrap_or("-"),
            if self.configured { "ready" } else { "unset" }
        )
    }
}

impl TableDisplay for ModuleInfo {
    fn to_table(&self) -> String {
        format!(
            "{} v{} [{}] by {}\n  {}\n  Price: {}\n  Tags: {}\n  Country: {}\n  Profiles: {}\n  Info: {}\n  Site: {}\n  Bugs: {}",
            self.name,
            self.version,
            self.category,
            self.author,
            self.description,
            if self.price > 0.0 { format!("{:.2}", self.price) } else { "free".to_string() },
            self.tags.join(", "),
            self.country,
            self.profiles.join(", "),
            self.url_info,
            self.url_site,
            self.url_bugs
        )
    }

    fn to_compact(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}

/// Simple message for display
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        let prefix = if self.success { "✓" } else { "✗" };
        format!("{} {}", prefix, self.message)
    }
}
