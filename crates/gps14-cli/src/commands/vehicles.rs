//! Vehicle list and latest locations.

use crate::cli::LocationsArgs;
use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::style::with_spinner;

use super::check_arguments;

/// Run the vehicles command
pub async fn run_vehicles(ctx: &Context) -> Result<(), CliError> {
    ctx.authenticate().await?;

    let vehicles = with_spinner("Loading vehicles...", ctx.json, ctx.client.get_vehicles()).await?;

    println!("{}", get_formatter(ctx.json).format_vehicles(&vehicles));

    Ok(())
}

/// Run the locations command
pub async fn run_locations(ctx: &Context, args: LocationsArgs) -> Result<(), CliError> {
    check_arguments(&[args.imei.as_str()])?;
    ctx.authenticate().await?;

    let locations = with_spinner(
        "Loading locations...",
        ctx.json,
        ctx.client.get_object_locations(&args.imei),
    )
    .await?;

    println!("{}", get_formatter(ctx.json).format_locations(&locations));

    Ok(())
}
