//! Command implementations.

pub mod address;
pub mod cmd;
pub mod events;
pub mod notifications;
pub mod overview;
pub mod route;
pub mod session;
pub mod vehicles;
pub mod watch;

pub use address::run_address;
pub use cmd::run_cmd;
pub use events::run_events;
pub use notifications::run_notifications;
pub use overview::run_overview;
pub use route::run_route;
pub use session::{run_login, run_logout, run_whoami};
pub use vehicles::{run_locations, run_vehicles};
pub use watch::run_watch;

use gps14_core::protocol::commands::has_unsafe_argument;

use crate::error::CliError;

/// Resolves on Ctrl+C. Never resolves if the handler cannot be installed.
pub(crate) async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

/// Reject arguments the protocol cannot carry.
pub(crate) fn check_arguments(args: &[&str]) -> Result<(), CliError> {
    if has_unsafe_argument(args) {
        return Err(CliError::InvalidArgument(
            "Arguments must not contain commas".to_string(),
        ));
    }
    Ok(())
}
