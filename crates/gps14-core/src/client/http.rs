//! HTTP command client for the tracking API.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Client, Response};

use crate::config::ClientConfig;
use crate::error::{ClientError, ConfigError};
use crate::protocol::commands::command_name;
use crate::protocol::response::{error_message, parse_command_body, parse_login_body};
use crate::protocol::RawResponse;

/// Value of the `api` query parameter on every request.
const API_SCOPE: &str = "user";

/// Pause between attempts in [`TrackingClient::execute_with_retry`].
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Client for the single-endpoint tracking protocol.
///
/// Holds the session token and knows nothing about individual commands:
/// every operation is a `cmd` string and every answer is a [`RawResponse`].
/// The client is `Send + Sync`; share it behind an `Arc` between pollers.
pub struct TrackingClient {
    http: Client,
    config: ClientConfig,
    session: RwLock<Option<Arc<str>>>,
}

impl std::fmt::Debug for TrackingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingClient")
            .field("endpoint", &self.config.endpoint())
            .field("authenticated", &self.snapshot_token().is_some())
            .finish()
    }
}

impl TrackingClient {
    /// Create a client without a session.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self::with_client(config, http))
    }

    /// Create a client with a custom reqwest Client.
    pub fn with_client(config: ClientConfig, http: Client) -> Self {
        Self {
            http,
            config,
            session: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the session token used by subsequent commands.
    pub fn set_session(&self, token: impl Into<String>) {
        let token: Arc<str> = Arc::from(token.into());
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the session token.
    pub fn clear_session(&self) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn session_token(&self) -> Option<String> {
        self.snapshot_token().map(|t| t.to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot_token().is_some()
    }

    fn snapshot_token(&self) -> Option<Arc<str>> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Exchange credentials for a session token.
    ///
    /// Does not change the held session; pass the token to
    /// [`set_session`](Self::set_session) to use it.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        tracing::debug!(username, "logging in");

        let response = self
            .send(&[
                ("api", API_SCOPE),
                ("username", username),
                ("password", password),
            ])
            .await?;

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.without_url().to_string()))?;

        parse_login_body(&body)
    }

    /// Execute one command under the current session.
    ///
    /// The token is captured when this method is called, not when the
    /// returned future is first polled, so a later `set_session` or
    /// `clear_session` never affects a request already issued.
    pub fn execute<'a>(
        &'a self,
        command: &'a str,
    ) -> impl Future<Output = Result<RawResponse, ClientError>> + Send + 'a {
        let token = self.snapshot_token();

        async move {
            let Some(token) = token else {
                return Err(ClientError::NotAuthenticated);
            };

            tracing::debug!(command = command_name(command), "executing command");

            let response = self
                .send(&[("api", API_SCOPE), ("key", &*token), ("cmd", command)])
                .await
                .map_err(|e| {
                    tracing::warn!(command = command_name(command), error = %e, "command failed");
                    e
                })?;

            let body = response.text().await.map_err(|e| {
                ClientError::request(None, format!("Failed to read response: {}", e.without_url()))
            })?;

            Ok(parse_command_body(&body))
        }
    }

    /// Execute a command, retrying request failures up to `max_retries` times.
    pub async fn execute_with_retry(
        &self,
        command: &str,
        max_retries: usize,
    ) -> Result<RawResponse, ClientError> {
        let mut attempt = 0;

        loop {
            match self.execute(command).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        command = command_name(command),
                        attempt,
                        max_retries,
                        "retrying command"
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Execute several commands concurrently.
    ///
    /// Results come back in completion order, each paired with its command.
    pub async fn execute_all(
        &self,
        commands: &[String],
        concurrency: usize,
    ) -> Vec<(String, Result<RawResponse, ClientError>)> {
        use futures::stream::{self, StreamExt};

        stream::iter(commands.iter())
            .map(|cmd| async move { (cmd.clone(), self.execute(cmd).await) })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await
    }

    async fn send(&self, params: &[(&str, &str)]) -> Result<Response, ClientError> {
        let response = self
            .http
            .get(self.config.endpoint())
            .query(params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::request(Some(status.as_u16()), error_message(&body)));
        }

        Ok(response)
    }
}

/// Classify a reqwest failure. The URL is stripped because it carries the
/// session key or the password in its query string.
fn transport_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::request(None, "Request timed out")
    } else {
        ClientError::request(None, format!("Network request failed: {}", e.without_url()))
    }
}
