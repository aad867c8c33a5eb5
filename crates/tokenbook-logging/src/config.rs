// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, and log file placement

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
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
#[serde(default)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub level: LogLevel,

    /// Per-module log level overrides
    pub module_levels: HashMap<String, LogLevel>,

    /// Output configuration
    pub output: OutputConfig,

    /// File logging configuration
    pub file: FileConfig,

    /// Raw `RUST_LOG` directives, handed to the filter unchanged
    #[serde(skip)]
    pub directives: Option<String>,
}

/// Configuration for different output targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable console output (written to stderr so stdout stays clean for tables)
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON structured output
    pub json: bool,

    /// Pretty-print console output (vs compact)
    pub pretty_console: bool,
}

/// How often the log file rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

/// Configuration for file logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Path to log file (defaults to <config dir>/tokenbook/tokenbook.log)
    pub path: PathBuf,

    /// Rollover schedule for the log file
    pub rotation: Rotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::INFO),
            module_levels: HashMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
            directives: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: false,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
            rotation: Rotation::default(),
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
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// `TOKENBOOK_LOG` wins over `RUST_LOG`. The `TOKENBOOK_LOG_JSON`,
    /// `TOKENBOOK_LOG_NO_CONSOLE` and `TOKENBOOK_LOG_NO_FILE` switches only
    /// need to be present.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level_str) = lookup("TOKENBOOK_LOG") {
            self.level =
                LogLevel(parse_log_level(&level_str).context("Invalid TOKENBOOK_LOG level")?);
        } else if let Some(level_str) = lookup("RUST_LOG") {
            self.parse_rust_log(&level_str);
        }

        if lookup("TOKENBOOK_LOG_JSON").is_some() {
            self.output.json = true;
        }

        if lookup("TOKENBOOK_LOG_NO_CONSOLE").is_some() {
            self.output.console = false;
        }

        if lookup("TOKENBOOK_LOG_NO_FILE").is_some() {
            self.output.file = false;
        }

        Ok(())
    }

    /// Take a RUST_LOG value (e.g. "info,hyper=off,tokenbook_tokens=debug").
    ///
    /// The directives go to the filter verbatim, so anything `EnvFilter`
    /// understands works. Plain levels are also mirrored into `level` and
    /// `module_levels`; `off` and other non-level values are left to the filter.
    fn parse_rust_log(&mut self, rust_log: &str) {
        for directive in rust_log.split(',').map(str::trim) {
            match directive.split_once('=') {
                Some((module, level_str)) => {
                    if let Ok(level) = parse_log_level(level_str) {
                        self.module_levels
                            .insert(module.to_string(), LogLevel(level));
                    }
                }
                None => {
                    if let Ok(level) = parse_log_level(directive) {
                        self.level = LogLevel(level);
                    }
                }
            }
        }
        self.directives = Some(rust_log.to_string());
    }
}

/// Get the default log file path: <config dir>/tokenbook/tokenbook.log
fn default_log_file_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("tokenbook").join("tokenbook.log")
    } else {
        PathBuf::from("tokenbook.log")
    }
}

/// Parse a log level string (case-insensitive).
pub fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.trim().to_lowercase().as_str() {
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
