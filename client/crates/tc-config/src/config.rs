use crate::{
    ApiConfig, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY, DEFAULT_CONFIG_FILENAME,
    DatabaseConfig, LoggingConfig, RetryConfig, TempIdConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub temp_id: TempIdConfig,
    pub retry: RetryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for TC_CONFIG_DIR env var, else use ./.tc/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(DEFAULT_CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TC_CONFIG_DIR env var > ./.tc/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("TC_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(|source| ConfigError::ConfigDir {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.database.validate()?;
        self.temp_id.validate()?;
        self.retry.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(self.database.file_in(&Self::config_dir()?))
    }

    /// Log configuration summary (never logs the API token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s, token: {})",
            self.api.temp_ids_url(),
            self.api.timeout_secs,
            if self.api.token.is_some() {
                "set"
            } else {
                "none"
            }
        );
        info!("  database: {}", self.database.path);
        info!("  temp_id: min_valid_count={}", self.temp_id.min_valid_count);
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x, jitter={}",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier,
            self.retry.jitter
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("TC_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("TC_API_TEMP_IDS_PATH", &mut self.api.temp_ids_path);
        Self::apply_env_parse("TC_API_TIMEOUT_SECS", &mut self.api.timeout_secs);
        Self::apply_env_option_string("TC_API_TOKEN", &mut self.api.token);

        // Database
        Self::apply_env_string("TC_DATABASE_PATH", &mut self.database.path);

        // Temp ID policy
        Self::apply_env_parse(
            "TC_TEMP_ID_MIN_VALID_COUNT",
            &mut self.temp_id.min_valid_count,
        );

        // Retry
        Self::apply_env_parse("TC_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "TC_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("TC_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "TC_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("TC_RETRY_JITTER", &mut self.retry.jitter);

        // Logging
        Self::apply_env_parse("TC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
