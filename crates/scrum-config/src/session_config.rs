use crate::DEFAULT_SESSION_FILENAME;

use std::path::PathBuf;

use serde::Deserialize;

/// Where the persisted session ({authToken, currentUser}) is written.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Explicit session file path. When unset, `<config dir>/session.json`.
    pub file: Option<PathBuf>,
}

impl SessionConfig {
    pub fn resolve_path(&self, config_dir: &std::path::Path) -> PathBuf {
        match &self.file {
            Some(path) => path.clone(),
            None => config_dir.join(DEFAULT_SESSION_FILENAME),
        }
    }
}
