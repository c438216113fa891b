use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::theme::Theme;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unable to determine config directory")]
    NoConfigDir,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application settings persisted as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name of the colour theme
    pub theme: String,
    /// Event poll interval of the terminal loop
    pub tick_rate_ms: u64,
    /// Where tracing output is written while the form is on screen
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default().name,
            tick_rate_ms: 50,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)?;
        Ok(())
    }

    /// `$XDG_CONFIG_HOME/contact-form/config.toml` or the platform config dir
    pub fn config_file_path() -> ConfigResult<PathBuf> {
        let config_dir = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(xdg_config) => PathBuf::from(xdg_config),
            None => dirs::config_dir().ok_or(ConfigError::NoConfigDir)?,
        };

        Ok(config_dir.join("contact-form").join("config.toml"))
    }

    /// Default log file used with `--debug` when none is configured
    pub fn default_log_file() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("contact-form").join("contact-form.log"))
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_rate_ms must be greater than 0".to_string(),
            ));
        }

        if Theme::by_name(&self.theme).is_none() {
            return Err(ConfigError::Invalid(format!(
                "Theme '{}' not found",
                self.theme
            )));
        }

        Ok(())
    }

    /// Resolve the configured theme
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.theme).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let config = AppConfig {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let config = AppConfig {
            theme: "Solarized".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: Theme 'Solarized' not found");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("theme = \"Gruvbox Light\"").unwrap();
        assert_eq!(config.theme().name, "Gruvbox Light");
        assert_eq!(config.tick_rate_ms, 50);
        assert!(config.log_file.is_none());
    }
}
