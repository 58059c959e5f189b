use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::UserSummary;

/// Session file name in the cache directory
const SESSION_FILE: &str = "session.json";

/// The three values written at login and cleared together on auth failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: Option<UserSummary>,
}

/// Client-side storage for the session credential and cached user info.
///
/// The API client reads the access token through this trait on every outgoing
/// request and clears the whole session when the backend answers 401. Keeping
/// it behind a trait lets tests substitute an in-memory store.
pub trait SessionStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn user(&self) -> Option<UserSummary>;

    /// Store the access token, refresh token, and user info from a login.
    fn store_login(&self, data: SessionData) -> Result<()>;

    /// Remove the access token, refresh token, and cached user info together.
    fn clear(&self) -> Result<()>;

    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

/// File-backed session store, persisted as `session.json` in the cache dir.
pub struct FileSessionStore {
    path: PathBuf,
    data: Mutex<Option<SessionData>>,
}

impl FileSessionStore {
    /// Open the store, loading any previously saved session from disk.
    pub fn open(cache_dir: PathBuf) -> Result<Self> {
        let path = cache_dir.join(SESSION_FILE);
        let data = if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            match serde_json::from_str(&contents) {
                Ok(data) => Some(data),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable session file");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    fn save(&self, data: &SessionData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, contents).context("Failed to write session file")?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn access_token(&self) -> Option<String> {
        self.data
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .map(|d| d.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.data
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .and_then(|d| d.refresh_token.clone())
    }

    fn user(&self) -> Option<UserSummary> {
        self.data
            .lock()
            .expect("session lock poisoned")
            .as_ref()
            .and_then(|d| d.user.clone())
    }

    fn store_login(&self, data: SessionData) -> Result<()> {
        // Memory first so the session is usable even when the disk write fails
        *self.data.lock().expect("session lock poisoned") = Some(data.clone());
        self.save(&data)
    }

    fn clear(&self) -> Result<()> {
        *self.data.lock().expect("session lock poisoned") = None;
        if self.path.exists() {
            std::fs::remove_file(&self.path).context("Failed to remove session file")?;
        }
        Ok(())
    }
}

/// In-memory session store for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    data: Mutex<Option<SessionData>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.data.lock().unwrap() = Some(SessionData {
            access_token: token.to_string(),
            refresh_token: None,
            user: None,
        });
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn access_token(&self) -> Option<String> {
        self.data
            .lock()
            .unwrap()
            .as_ref()
            .map(|d| d.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.data
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|d| d.refresh_token.clone())
    }

    fn user(&self) -> Option<UserSummary> {
        self.data.lock().unwrap().as_ref().and_then(|d| d.user.clone())
    }

    fn store_login(&self, data: SessionData) -> Result<()> {
        *self.data.lock().unwrap() = Some(data);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.data.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> SessionData {
        SessionData {
            access_token: "tok123".to_string(),
            refresh_token: Some("refresh456".to_string()),
            user: None,
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().to_path_buf()).unwrap();

        assert!(!store.is_authenticated());
        store.store_login(sample_session()).unwrap();
        assert_eq!(store.access_token().as_deref(), Some("tok123"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh456"));

        // A fresh store reads the same session back from disk
        let reopened = FileSessionStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.access_token().as_deref(), Some("tok123"));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().to_path_buf()).unwrap();
        store.store_login(sample_session()).unwrap();

        store.clear().unwrap();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert!(store.user().is_none());
        assert!(!dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn test_corrupt_session_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();

        let store = FileSessionStore::open(dir.path().to_path_buf()).unwrap();
        assert!(!store.is_authenticated());
    }
}
