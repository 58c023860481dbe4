//! Persisted login session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

use super::KeyValueStore;

pub const API_KEY_KEY: &str = "apiKey";
pub const USERNAME_KEY: &str = "username";

/// Session token plus the username it was issued for.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub api_key: String,
    pub username: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

/// Reads and writes the [`Session`] through a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted session, if a key was saved.
    pub async fn load(&self) -> Result<Option<Session>, StorageError> {
        let Some(api_key) = self.store.get(API_KEY_KEY).await? else {
            return Ok(None);
        };

        let username = self.store.get(USERNAME_KEY).await?;

        Ok(Some(Session { api_key, username }))
    }

    pub async fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.store.set(API_KEY_KEY, &session.api_key).await?;

        match &session.username {
            Some(username) => self.store.set(USERNAME_KEY, username).await,
            None => self.store.remove(&[USERNAME_KEY]).await,
        }
    }

    /// Forget both the key and the username.
    pub async fn logout(&self) -> Result<(), StorageError> {
        tracing::debug!("removing persisted session");
        self.store.remove(&[API_KEY_KEY, USERNAME_KEY]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn session_store() -> (SessionStore, Arc<MemoryStore>) {
        let backing = Arc::new(MemoryStore::new());
        (SessionStore::new(backing.clone()), backing)
    }

    #[tokio::test]
    async fn test_load_empty() {
        let (sessions, _) = session_store();
        assert_eq!(sessions.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (sessions, backing) = session_store();
        let session = Session {
            api_key: "ABC123".to_string(),
            username: Some("fleet".to_string()),
        };

        sessions.save(&session).await.unwrap();

        assert_eq!(sessions.load().await.unwrap(), Some(session));
        assert_eq!(
            backing.get("apiKey").await.unwrap().as_deref(),
            Some("ABC123")
        );
        assert_eq!(
            backing.get("username").await.unwrap().as_deref(),
            Some("fleet")
        );
    }

    #[tokio::test]
    async fn test_logout_removes_both_keys() {
        let (sessions, backing) = session_store();
        sessions
            .save(&Session {
                api_key: "ABC123".to_string(),
                username: Some("fleet".to_string()),
            })
            .await
            .unwrap();

        sessions.logout().await.unwrap();

        assert_eq!(sessions.load().await.unwrap(), None);
        assert_eq!(backing.get("username").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_username_without_key_is_no_session() {
        let (sessions, backing) = session_store();
        backing.set("username", "fleet").await.unwrap();

        assert_eq!(sessions.load().await.unwrap(), None);
    }

    #[test]
    fn test_debug_redacts_key() {
        let session = Session {
            api_key: "secret".to_string(),
            username: None,
        };
        assert!(!format!("{:?}", session).contains("secret"));
    }
}
