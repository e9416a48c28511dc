use crate::DEFAULT_LOG_LEVEL;

use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Verbosity threshold. Parsing is lenient: an unrecognized name falls back
/// to the default rather than failing startup over a typo in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    pub fn parse(value: &str) -> Self {
        LogLevel(match value.to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => DEFAULT_LOG_LEVEL,
        })
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(LogLevel::parse(&String::deserialize(deserializer)?))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Optional log file. None = stderr.
    pub file: Option<PathBuf>,
    /// Colored output when logging to a terminal.
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            file: None,
            colored: true,
        }
    }
}
