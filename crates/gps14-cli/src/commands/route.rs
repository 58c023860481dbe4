//! Route history for one vehicle.

use chrono::Local;

use gps14_core::DateRange;

use crate::cli::RouteArgs;
use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::style::with_spinner;

use super::check_arguments;

/// Run the route command
pub async fn run_route(ctx: &Context, args: RouteArgs) -> Result<(), CliError> {
    check_arguments(&[args.imei.as_str()])?;
    ctx.authenticate().await?;

    let range = DateRange::last_days(args.days, Local::now().date_naive());
    tracing::debug!(imei = %args.imei, from = %range.from, to = %range.to, "loading route");

    let route = with_spinner(
        "Loading route...",
        ctx.json,
        ctx.client.get_object_route(&args.imei, &range),
    )
    .await?;

    println!(
        "{}",
        get_formatter(ctx.json).format_route(&args.imei, &route, args.points)
    );

    Ok(())
}
