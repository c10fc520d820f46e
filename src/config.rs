use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::i18n::Locale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings directory (config, label overrides, log file)
    pub settings_dir: PathBuf,
    /// Language for every displayed label
    pub locale: Locale,
    /// Optional TOML file overriding individual dialog labels
    pub labels_path: Option<PathBuf>,
    /// Whether a click outside the dialog dismisses it
    pub close_on_backdrop: bool,
    /// Character used for lit cells in plain-text output
    pub on_char: char,
    /// Character used for dark cells in plain-text output
    pub off_char: char,
    /// Number of generated patterns kept in the history list
    pub history_limit: usize,
    /// Log file for the interactive app (default: <settings_dir>/textpattern.log)
    pub log_file: Option<PathBuf>,
}

fn default_settings_dir() -> PathBuf {
    let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home_dir.join(".textpattern")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_dir: default_settings_dir(),
            locale: Locale::default(),
            labels_path: None,
            close_on_backdrop: true,
            on_char: '█',
            off_char: '·',
            history_limit: 10,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `~/.textpattern/config.toml`
    /// when no path is given.  A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = path.unwrap_or_else(|| default_settings_dir().join("config.toml"));

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to `path`, or to `<settings_dir>/config.toml`.
    pub fn save(&self, path: Option<PathBuf>) -> Result<(), ConfigError> {
        let config_path = path.unwrap_or_else(|| self.settings_dir.join("config.toml"));

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    /// Effective log file path.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.settings_dir.join("textpattern.log"))
    }

    /// Resolve a possibly relative path against the settings directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.settings_dir.join(path)
        }
    }
}
