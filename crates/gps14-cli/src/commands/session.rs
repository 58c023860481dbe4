//! Login, logout, and whoami.

use gps14_core::storage::Session;

use crate::cli::LoginArgs;
use crate::context::Context;
use crate::error::CliError;
use crate::output::get_formatter;
use crate::style::with_spinner;

/// Run the login command
pub async fn run_login(ctx: &Context, args: LoginArgs) -> Result<(), CliError> {
    let formatter = get_formatter(ctx.json);

    let token = with_spinner(
        "Logging in...",
        ctx.json,
        ctx.client.login(&args.username, &args.password),
    )
    .await?;

    ctx.sessions
        .save(&Session {
            api_key: token.clone(),
            username: Some(args.username.clone()),
        })
        .await?;
    ctx.client.set_session(token);

    println!(
        "{}",
        formatter.format_message(&format!("Logged in as {}", args.username))
    );

    Ok(())
}

/// Run the logout command
pub async fn run_logout(ctx: &Context) -> Result<(), CliError> {
    ctx.sessions.logout().await?;
    ctx.client.clear_session();

    println!("{}", get_formatter(ctx.json).format_message("Logged out"));

    Ok(())
}

/// Run the whoami command
pub async fn run_whoami(ctx: &Context) -> Result<(), CliError> {
    let session = ctx.sessions.load().await?;

    println!(
        "{}",
        get_formatter(ctx.json).format_session(session.as_ref())
    );

    Ok(())
}
