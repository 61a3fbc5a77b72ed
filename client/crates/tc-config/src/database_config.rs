use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

/// Location of the local temp ID cache
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config directory
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    /// The cache file must stay inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = Path::new(&self.path);

        if self.path.trim().is_empty() {
            return Err(ConfigError::invalid(
                "database.path",
                &self.path,
                "must name a file",
            ));
        }

        if path.is_absolute() {
            return Err(ConfigError::invalid(
                "database.path",
                &self.path,
                "must be relative to the config directory",
            ));
        }

        if path.components().any(|c| c == Component::ParentDir) {
            return Err(ConfigError::invalid(
                "database.path",
                &self.path,
                "must not contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute cache file path under `config_dir`.
    pub fn file_in(&self, config_dir: &Path) -> PathBuf {
        config_dir.join(&self.path)
    }
}
