mod api_config;
mod bounds;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod retry_config;
mod temp_id_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use retry_config::RetryConfig;
pub use temp_id_config::TempIdConfig;

const DEFAULT_CONFIG_DIRECTORY: &str = ".tc";
const DEFAULT_CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_DATABASE_FILENAME: &str = "temp_ids.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
