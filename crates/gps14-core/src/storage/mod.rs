//! Persistence for the session and user preferences.

pub mod kv;
pub mod preferences;
pub mod session;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use preferences::{Preferences, PreferencesStore};
pub use session::{Session, SessionStore};

/// Get the default data directory for GPS-14 tools.
///
/// Uses the `directories` crate to find the appropriate platform-specific
/// data directory.
pub fn default_data_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("net", "gps-14", "gps14")
        .map(|dirs| dirs.data_dir().to_path_buf())
}
