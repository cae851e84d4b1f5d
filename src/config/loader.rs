#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Config;

// Fallback path when no user config directory is known
const CONFIG_FILE_PATH: &str = "config/minofall.toml";

// Environment override for the config file location
pub const CONFIG_ENV_VAR: &str = "MINOFALL_CONFIG";

/// Loads the config from its default location, writing defaults there first
/// if the file does not exist yet.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from_path(&config_file_path())
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        let default_config = Config::default();
        save_config_to_path(&default_config, path)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

pub fn save_config_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;
    Ok(())
}

// Get the path to the config file
#[must_use]
pub fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("minofall").join("config.toml")
    } else {
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
