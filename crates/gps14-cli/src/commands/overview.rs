//! Account overview.

use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::style::with_spinner;

/// Run the overview command
pub async fn run_overview(ctx: &Context) -> Result<(), CliError> {
    ctx.authenticate().await?;

    let overview = with_spinner("Loading account...", ctx.json, ctx.client.get_overview()).await?;

    println!("{}", get_formatter(ctx.json).format_overview(&overview));

    Ok(())
}
