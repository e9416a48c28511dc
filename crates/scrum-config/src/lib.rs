mod config;
mod error;
mod logging_config;
mod remote_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use logging_config::{LogLevel, LoggingConfig};
pub use remote_config::RemoteConfig;
pub use session_config::SessionConfig;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
