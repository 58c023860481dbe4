//! Shared setup for commands: the client, the persisted session, and preferences.

use std::sync::Arc;
use std::time::Duration;

use gps14_core::config::TIMEOUT_ENV;
use gps14_core::storage::{default_data_dir, FileStore, PreferencesStore, Session, SessionStore};
use gps14_core::{ClientConfig, TrackingClient};

use crate::cli::Cli;
use crate::error::{CliError, ConfigError};

pub struct Context {
    pub client: Arc<TrackingClient>,
    pub sessions: SessionStore,
    pub preferences: PreferencesStore,
    pub json: bool,
}

impl Context {
    /// Build the client and stores from the global flags.
    pub fn new(cli: &Cli) -> Result<Self, CliError> {
        if cli.timeout == 0 {
            return Err(ConfigError::InvalidValue {
                name: TIMEOUT_ENV.to_string(),
                value: cli.timeout.to_string(),
            }
            .into());
        }

        let config =
            ClientConfig::new(&cli.base_url)?.with_timeout(Duration::from_millis(cli.timeout));
        let client = TrackingClient::new(config)?;

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(default_data_dir)
            .ok_or(CliError::NoDataDir)?;
        tracing::debug!(dir = %data_dir.display(), "using data directory");

        let store = Arc::new(FileStore::new(data_dir)?);

        Ok(Self {
            client: Arc::new(client),
            sessions: SessionStore::new(store.clone()),
            preferences: PreferencesStore::new(store),
            json: cli.json,
        })
    }

    /// Load the saved session into the client.
    pub async fn authenticate(&self) -> Result<Session, CliError> {
        let session = self.sessions.load().await?.ok_or(CliError::NotLoggedIn)?;
        self.client.set_session(session.api_key.clone());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn context_in(dir: &std::path::Path, extra: &[&str]) -> Result<Context, CliError> {
        let mut args = vec!["gps14", "--data-dir", dir.to_str().unwrap()];
        args.extend_from_slice(extra);
        args.push("whoami");
        Context::new(&Cli::parse_from(args))
    }

    #[tokio::test]
    async fn test_authenticate_without_session() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context_in(temp.path(), &[]).unwrap();

        let result = ctx.authenticate().await;

        assert!(matches!(result, Err(CliError::NotLoggedIn)));
        assert!(!ctx.client.is_authenticated());
    }

    #[tokio::test]
    async fn test_authenticate_loads_saved_session() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = context_in(temp.path(), &[]).unwrap();
        ctx.sessions
            .save(&Session {
                api_key: "ABC123".to_string(),
                username: Some("fleet".to_string()),
            })
            .await
            .unwrap();

        let session = ctx.authenticate().await.unwrap();

        assert_eq!(session.username.as_deref(), Some("fleet"));
        assert_eq!(ctx.client.session_token().as_deref(), Some("ABC123"));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let temp = tempfile::tempdir().unwrap();
        let result = context_in(temp.path(), &["--base-url", "tracking.example"]);
        assert!(matches!(result, Err(CliError::Core(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let temp = tempfile::tempdir().unwrap();
        let result = context_in(temp.path(), &["--timeout", "0"]);
        assert!(result.is_err());
    }
}
