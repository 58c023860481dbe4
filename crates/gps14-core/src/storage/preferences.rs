//! User preferences, persisted as one JSON document.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

use super::KeyValueStore;

pub const PREFERENCES_KEY: &str = "gps14-preferences";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
        }
    }
}

#[derive(Clone)]
pub struct PreferencesStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferencesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load preferences, falling back to defaults when none are saved or
    /// the saved document is unreadable.
    pub async fn load(&self) -> Result<Preferences, StorageError> {
        let Some(raw) = self.store.get(PREFERENCES_KEY).await? else {
            return Ok(Preferences::default());
        };

        match serde_json::from_str(&raw) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable preferences");
                Ok(Preferences::default())
            }
        }
    }

    pub async fn save(&self, prefs: &Preferences) -> Result<(), StorageError> {
        let raw = serde_json::to_string(prefs)?;
        self.store.set(PREFERENCES_KEY, &raw).await
    }

    pub async fn set_notifications_enabled(&self, enabled: bool) -> Result<Preferences, StorageError> {
        let mut prefs = self.load().await?;
        prefs.notifications_enabled = enabled;
        self.save(&prefs).await?;
        Ok(prefs)
    }
}
