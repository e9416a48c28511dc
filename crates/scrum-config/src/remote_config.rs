use crate::{ConfigError, ConfigErrorResult, DEFAULT_SERVER_URL};

use serde::Deserialize;

/// Where the backend REST API lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_SERVER_URL),
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::config("server.base_url must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::config(format!(
                "server.base_url must start with http:// or https://, got {}",
                self.base_url
            )));
        }

        Ok(())
    }
}
