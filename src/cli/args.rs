//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Free Mobile SMS alert tool
///
/// Send alerts to your own phone through the Free Mobile notification API.
#[derive(Parser, Debug)]
#[command(name = "freesms")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FREESMS_CONFIG")]
    pub config: Option<String>,

    /// Override the SMS API endpoint
    #[arg(long, global = true, env = "FREESMS_ENDPOINT")]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter, `debug` when verbose
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store API credentials
    SetCredentials {
        /// Free Mobile user id (8 characters)
        userid: String,

        /// Notification API key
        apikey: String,
    },

    /// Show configured credentials (API key masked)
    Show,

    /// Send a test SMS
    Test,

    /// Send an SMS
    Send {
        /// Message to send
        message: String,
    },

    /// Render an alert event as SMS
    Render(RenderArgs),

    /// Show module information
    Info,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Read event parameters from a JSON file ("-" for stdin)
    #[arg(long, conflicts_with_all = ["subject", "message", "attachment", "timestamp"])]
    pub event: Option<String>,

    /// Alert subject
    #[arg(long)]
    pub subject: Option<String>,

    /// Alert message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Alert attachment
    #[arg(long)]
    pub attachment: Option<String>,

    /// Alert timestamp (seconds since epoch)
    #[arg(long)]
    pub timestamp: Option<f64>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_test() {
        let args = Cli::try_parse_from(["freesms", "test"]).unwrap();
        assert!(matches!(args.command, Commands::Test));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["freesms", "-v", "show"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_log_filter() {
        let quiet = Cli::try_parse_from(["freesms", "show"]).unwrap();
        assert_eq!(quiet.log_filter(), "warn");

        let verbose = Cli::try_parse_from(["freesms", "show", "--verbose"]).unwrap();
        assert_eq!(verbose.log_filter(), "debug");
    }

    #[test]
    fn test_cli_parse_set_credentials() {
        let args =
            Cli::try_parse_from(["freesms", "set-credentials", "useriddd", "apikey"]).unwrap();
        if let Commands::SetCredentials { userid, apikey } = args.command {
            assert_eq!(userid, "useriddd");
            assert_eq!(apikey, "apikey");
        } else {
            panic!("Expected SetCredentials command");
        }
    }

    #[test]
    fn test_cli_set_credentials_requires_both() {
        let result = Cli::try_parse_from(["freesms", "set-credentials", "useriddd"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_send() {
        let args = Cli::try_parse_from([
            "freesms",
            "--endpoint",
            "http://localhost:8080/sendmsg",
            "send",
            "Intruder detected",
        ])
        .unwrap();
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8080/sendmsg"));
        if let Commands::Send { message } = args.command {
            assert_eq!(message, "Intruder detected");
        } else {
            panic!("Expected Send command");
        }
    }

    #[test]
    fn test_cli_parse_render() {
        let args = Cli::try_parse_from([
            "freesms",
            "render",
            "--subject",
            "Alarm",
            "-m",
            "Intruder detected",
            "--timestamp",
            "1700000000",
        ])
        .unwrap();
        if let Commands::Render(render) = args.command {
            assert_eq!(render.subject.as_deref(), Some("Alarm"));
            assert_eq!(render.message.as_deref(), Some("Intruder detected"));
            assert_eq!(render.timestamp, Some(1_700_000_000.0));
            assert!(render.event.is_none());
        } else {
            panic!("Expected Render command");
        }
    }

    #[test]
    fn test_cli_render_event_conflicts_with_fields() {
        let result =
            Cli::try_parse_from(["freesms", "render", "--event", "alert.json", "-m", "hi"]);
        assert!(result.is_err());
    }
}
