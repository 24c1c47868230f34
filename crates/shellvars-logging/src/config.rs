// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, and file path configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::Level;

/// Wrapper for tracing::Level that implements Serialize/Deserialize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub Level);

impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let level_str = match self.0 {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        serializer.serialize_str(level_str)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<LogLevel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let level = parse_log_level(&s).map_err(serde::de::Error::custom)?;
        Ok(LogLevel(level))
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

/// Main configuration structure for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub level: LogLevel,

    /// Enable console output
    pub console: bool,

    /// Log file path; None disables file output
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::INFO),
            console: true,
            file: Some(default_log_file_path()),
        }
    }
}

impl LoggingConfig {
    /// Create a new configuration with environment variable overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides to this configuration.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        // SHELLVARS_LOG takes precedence over RUST_LOG; the latter is also
        // honored directly by the env filter at subscriber setup
        if let Ok(level_str) = env::var("SHELLVARS_LOG") {
            self.level =
                LogLevel(parse_log_level(&level_str).context("Invalid SHELLVARS_LOG level")?);
        } else if let Ok(level_str) = env::var("RUST_LOG") {
            // Only a bare level is interpreted here; module directives are
            // left to the env filter
            if let Ok(level) = parse_log_level(level_str.trim()) {
                self.level = LogLevel(level);
            }
        }

        if env::var("SHELLVARS_LOG_NO_CONSOLE").is_ok() {
            self.console = false;
        }

        if env::var("SHELLVARS_LOG_NO_FILE").is_ok() {
            self.file = None;
        }

        Ok(())
    }
}

/// Get the default log file path: ~/.config/shellvars/shellvars.log
fn default_log_file_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("shellvars").join("shellvars.log")
    } else {
        // Fallback to current directory if config dir not available
        PathBuf::from("shellvars.log")
    }
}

/// Parse a log level string (case-insensitive).
pub(crate) fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level.0, Level::INFO);
        assert!(config.console);
        assert!(config.file.is_some());
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("Info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

        assert!(parse_log_level("invalid").is_err());
    }

    #[test]
    fn test_default_log_path() {
        let path = default_log_file_path();
        assert!(path.to_string_lossy().contains("shellvars.log"));
    }

    #[test]
    fn test_log_level_serde_round_trip() {
        let level = LogLevel(Level::DEBUG);
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, "\"debug\"");

        let parsed: LogLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, level);
    }
}
