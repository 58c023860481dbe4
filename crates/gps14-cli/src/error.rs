//! Error types for the GPS-14 CLI.
//!
//! CliError wraps CoreError from the shared library and adds CLI-specific variants.

use gps14_core::error::CoreError;
use thiserror::Error;

// Re-export core error types so command modules can use them via crate::error
pub use gps14_core::error::{ClientError, ConfigError, StorageError};

/// Exit codes for the CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NETWORK_ERROR: i32 = 2;
    pub const AUTH_ERROR: i32 = 3;
    pub const INVALID_ARGS: i32 = 4;
}

/// Main error type for the CLI
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not logged in. Run `gps14 login <username>` first.")]
    NotLoggedIn,

    #[error("No data directory available; pass --data-dir")]
    NoDataDir,
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => match e {
                CoreError::Client(client) => match client {
                    ClientError::Auth(_) | ClientError::NotAuthenticated => {
                        exit_codes::AUTH_ERROR
                    }
                    ClientError::Request { .. } => exit_codes::NETWORK_ERROR,
                    ClientError::Decode(_) => exit_codes::GENERAL_ERROR,
                },
                CoreError::Config(_) => exit_codes::INVALID_ARGS,
                CoreError::Storage(_) => exit_codes::GENERAL_ERROR,
                CoreError::Io(_) => exit_codes::GENERAL_ERROR,
            },
            CliError::InvalidArgument(_) => exit_codes::INVALID_ARGS,
            CliError::NotLoggedIn => exit_codes::AUTH_ERROR,
            CliError::NoDataDir => exit_codes::GENERAL_ERROR,
        }
    }
}

// Conversions from core error subtypes to CliError
impl From<ClientError> for CliError {
    fn from(e: ClientError) -> Self {
        CliError::Core(CoreError::Client(e))
    }
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        CliError::Core(CoreError::Storage(e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Core(CoreError::Config(e))
    }
}
