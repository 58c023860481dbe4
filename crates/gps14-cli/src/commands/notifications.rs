//! Notifications preference.

use crate::cli::{NotificationsArgs, Toggle};
use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;

/// Run the notifications command
pub async fn run_notifications(ctx: &Context, args: NotificationsArgs) -> Result<(), CliError> {
    let prefs = match args.state {
        Some(state) => {
            ctx.preferences
                .set_notifications_enabled(state == Toggle::On)
                .await?
        }
        None => ctx.preferences.load().await?,
    };

    println!("{}", get_formatter(ctx.json).format_preferences(&prefs));

    Ok(())
}
