use crate::{
    ConfigError, ConfigErrorResult, LoggingConfig, LogLevel, RemoteConfig, SessionConfig,
};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: RemoteConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for SCRUM_CONFIG_DIR env var, else use ./.scrum/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SCRUM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SCRUM_CONFIG_DIR env var > ./.scrum/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("SCRUM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".scrum"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SCRUM_SERVER_URL") {
            self.server.base_url = url;
        }

        if let Ok(level) = std::env::var("SCRUM_LOG_LEVEL") {
            self.logging.level = LogLevel::parse(&level);
        }
    }

    /// Resolved session file path for this configuration.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.session.resolve_path(&Self::config_dir()?))
    }

    /// Validate all configuration. Call after load() to catch errors at
    /// startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()
    }
}
