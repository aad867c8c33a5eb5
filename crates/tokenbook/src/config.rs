// ABOUTME: Application configuration loaded from tokenbook.toml
// ABOUTME: Holds the logging section and an optional replacement token catalog

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokenbook_logging::{Level, LoggingConfig, info};

pub const CONFIG_FILE_NAME: &str = "tokenbook.toml";

/// Where the token catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokensConfig {
    /// TOML catalog to load instead of the built-in design system.
    /// Relative paths are taken from the config file's directory.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub tokens: TokensConfig,
}

// Terminal output stays quiet unless asked for.
fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: Level::WARN.into(),
        ..LoggingConfig::default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: default_logging(),
            tokens: TokensConfig::default(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/tokenbook/tokenbook.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tokenbook").join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit path, else the default location, else defaults.
    ///
    /// An explicit path must exist. A missing default file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let (Some(source), Some(base)) = (config.tokens.source.as_mut(), path.parent())
            && source.is_relative()
        {
            *source = base.join(&*source);
        }

        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Note where the configuration came from once logging is up.
    pub fn log_summary(&self, origin: Option<&Path>) {
        info!(
            config_path = ?origin,
            token_source = ?self.tokens.source,
            level = %self.logging.level.0,
            "Loaded tokenbook configuration"
        );
    }
}
