//! GPS-14 CLI - Command-line interface for the GPS-14 vehicle tracking service.
//!
//! This tool provides terminal access to vehicles, locations, events, and
//! routes, enabling automation via scripts and headless operation.

mod cli;
mod commands;
mod context;
mod error;
mod output;
mod style;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::Context;
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Logs go to stderr so JSON output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = Context::new(&cli)?;

    match cli.command {
        Commands::Login(args) => commands::run_login(&ctx, args).await,
        Commands::Logout => commands::run_logout(&ctx).await,
        Commands::Whoami => commands::run_whoami(&ctx).await,
        Commands::Vehicles => commands::run_vehicles(&ctx).await,
        Commands::Locations(args) => commands::run_locations(&ctx, args).await,
        Commands::Events(args) => commands::run_events(&ctx, args).await,
        Commands::Route(args) => commands::run_route(&ctx, args).await,
        Commands::Address(args) => commands::run_address(&ctx, args).await,
        Commands::Overview => commands::run_overview(&ctx).await,
        Commands::Watch(args) => commands::run_watch(&ctx, args).await,
        Commands::Cmd(args) => commands::run_cmd(&ctx, args).await,
        Commands::Notifications(args) => commands::run_notifications(&ctx, args).await,
    }
}
