//! Info command implementation
//!
//! Prints the module catalog description.

use crate::cli::args::OutputFormat;
use crate::cli::output::print_output;
use crate::error::Result;
use crate::module::MODULE_INFO;

/// Execute the info command
pub fn run_info(format: OutputFormat) -> Result<()> {
    print_output(&MODULE_INFO, format)?;
    Ok(())
}
