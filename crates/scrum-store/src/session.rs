use crate::{StoreError, StoreResult};

use scrum_core::User;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Client-side authentication lifecycle.
///
/// `AuthenticationInFlight` covers the window between submitting credentials
/// and the backend's answer; no other action observes a half-logged-in user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    AuthenticationInFlight,
    Authenticated(User),
}

impl Session {
    pub fn current_user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

/// Durable form of an authenticated session. The field names mirror the
/// storage keys the web client uses (`authToken`, `currentUser`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub auth_token: String,
    pub current_user: User,
}

/// Reads and writes the persisted session as a single JSON file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best-effort restore. A missing file is the normal anonymous start;
    /// an unreadable one is logged and treated the same.
    pub fn load(&self) -> Option<PersistedSession> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("Cannot read session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Discarding corrupt session file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub fn save(&self, session: &PersistedSession) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::session(format!("creating {}: {e}", parent.display())))?;
        }

        let contents = serde_json::to_string_pretty(session)
            .map_err(|e| StoreError::session(e.to_string()))?;
        std::fs::write(&self.path, contents)
            .map_err(|e| StoreError::session(format!("writing {}: {e}", self.path.display())))
    }

    /// Erase the persisted session. Already-absent files are fine.
    pub fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            log::warn!("Cannot remove session file {}: {}", self.path.display(), e);
        }
    }
}
