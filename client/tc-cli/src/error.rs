use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] tc_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] tc_db::DbError),

    #[error("API client error: {0}")]
    Api(#[from] tc_api::ApiError),

    #[error(transparent)]
    TempId(#[from] tc_temp_id::TempIdError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
