use std::fmt::Display;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting was read but holds a value the client cannot use.
    #[error("Invalid {key} = {value:?}: {reason} {location}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Cannot determine the config directory: {source} {location}")]
    ConfigDir {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// `key` is the dotted TOML name, e.g. `retry.max_attempts`.
    #[track_caller]
    pub fn invalid(key: &'static str, value: impl Display, reason: impl Into<String>) -> Self {
        ConfigError::InvalidSetting {
            key,
            value: value.to_string(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Setting rejected by validation, if that is what failed.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidSetting { key, .. } => Some(*key),
            _ => None,
        }
    }
}

pub type ConfigErrorResult<T> = Result<T, ConfigError>;
