//! Raw command execution.

use gps14_core::protocol::commands::command_name;

use crate::cli::CmdArgs;
use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::style::with_spinner;

/// Run the cmd command
pub async fn run_cmd(ctx: &Context, args: CmdArgs) -> Result<(), CliError> {
    let command = args.command.trim();
    if command.is_empty() {
        return Err(CliError::InvalidArgument("Command cannot be empty".to_string()));
    }

    ctx.authenticate().await?;

    let result = with_spinner(
        &format!("Running {}...", command_name(command)),
        ctx.json,
        ctx.client.execute_with_retry(command, args.retries),
    )
    .await?;

    println!(
        "{}",
        get_formatter(ctx.json).format_command_result(command, &result)
    );

    Ok(())
}
