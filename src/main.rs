//! freesms - Free Mobile SMS alert tool
//!
//! A command-line tool for configuring the Free Mobile SMS renderer and
//! sending alerts through it.

use clap::Parser;
use freesms::cli::args::{generate_completions, Cli, Commands};
use freesms::commands::{
    build_renderer, run_info, run_render, run_send, run_set_credentials, run_show, run_test,
};
use freesms::config::FileConfigStore;
use freesms::error::{AppError, DomainError, SendError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging, RUST_LOG still wins over the verbose flag
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .format_timestamp(None)
        .init();

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.config.as_deref();
    let endpoint = cli.endpoint.as_deref();

    match &cli.command {
        Commands::SetCredentials { userid, apikey } => {
            let renderer = build_renderer(config, endpoint)?;
            run_set_credentials(&renderer, userid, apikey, cli.format)
        }

        Commands::Show => run_show(&FileConfigStore::from_option(config), cli.format),

        Commands::Test => run_test(&build_renderer(config, endpoint)?, cli.format),

        Commands::Send { message } => {
            run_send(&build_renderer(config, endpoint)?, message, cli.format)
        }

        Commands::Render(args) => run_render(build_renderer(config, endpoint)?, args, cli.format),

        Commands::Info => run_info(cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Send(SendError::MissingCredentials) => {
            eprintln!();
            eprintln!("Hint: Store your credentials first:");
            eprintln!("      freesms set-credentials <USERID> <APIKEY>");
        }
        AppError::Domain(DomainError::InvalidUserId) => {
            eprintln!();
            eprintln!("Hint: The user id is the 8-digit login of your Free Mobile account.");
        }
        AppError::Send(SendError::Rejected { status: 403, .. }) => {
            eprintln!();
            eprintln!("Hint: Enable the \"Notifications par SMS\" option in your Free Mobile");
            eprintln!("      account and check that the API key is correct.");
        }
        AppError::Send(SendError::Internal(_)) | AppError::AlertNotSent => {
            eprintln!();
            eprintln!("Hint: Run again with --verbose for details.");
        }
        _ => {}
    }
}
