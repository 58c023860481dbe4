//! Live location watch.

use std::time::Duration;

use chrono::Local;
use colored::*;

use gps14_core::poll::LoadState;
use gps14_core::protocol::commands::ALL_OBJECTS;
use gps14_core::{Poller, VehicleLocation};

use crate::cli::WatchArgs;
use crate::context::Context;
use crate::error::CliError;
use crate::output::{get_formatter, OutputFormatter};

use super::ctrl_c;

/// Run the watch command
pub async fn run_watch(ctx: &Context, args: WatchArgs) -> Result<(), CliError> {
    if args.interval == 0 {
        return Err(CliError::InvalidArgument(
            "Interval must be at least 1 second".to_string(),
        ));
    }

    ctx.authenticate().await?;

    let formatter = get_formatter(ctx.json);
    let poller = Poller::new(Duration::from_secs(args.interval));
    let client = ctx.client.as_ref();

    let refreshes = poller
        .run(
            || client.get_object_locations(ALL_OBJECTS),
            |state| render(formatter.as_ref(), &state, ctx.json, args.interval),
            ctrl_c(),
        )
        .await;

    tracing::debug!(refreshes, "watch stopped");

    Ok(())
}

fn render(
    formatter: &dyn OutputFormatter,
    state: &LoadState<Vec<VehicleLocation>>,
    json: bool,
    interval: u64,
) {
    if json {
        match state {
            LoadState::Loaded(locations) => println!("{}", formatter.format_locations(locations)),
            LoadState::Failed(message) => eprintln!("Error: {}", message),
        }
        return;
    }

    // Clear screen and print header
    print!("\x1B[2J\x1B[1;1H");
    println!("{}", "GPS-14 Live Locations".bold());
    println!(
        "{}",
        format!(
            "Updated {} - refreshing every {}s - press Ctrl+C to stop",
            Local::now().format("%H:%M:%S"),
            interval
        )
        .dimmed()
    );
    println!();

    match state {
        LoadState::Loaded(locations) => println!("{}", formatter.format_locations(locations)),
        LoadState::Failed(message) => println!("{} {}", "Refresh failed:".red(), message),
    }
}
