use crate::bounds::check_range;
use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TEMP_IDS_PATH: &str = "/temp-ids";

pub const TIMEOUT_SECS_RANGE: RangeInclusive<u64> = 1..=120;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to reach the temp ID issuing API
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and optional port, no trailing path
    pub base_url: String,
    /// Path of the temp ID endpoint, appended to `base_url`
    pub temp_ids_path: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Bearer token sent with every request, if set
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            temp_ids_path: String::from(DEFAULT_TEMP_IDS_PATH),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::invalid(
                "api.base_url",
                &self.base_url,
                "must start with http:// or https://",
            ));
        }

        if !self.temp_ids_path.starts_with('/') {
            return Err(ConfigError::invalid(
                "api.temp_ids_path",
                &self.temp_ids_path,
                "must start with '/'",
            ));
        }

        check_range("api.timeout_secs", self.timeout_secs, &TIMEOUT_SECS_RANGE)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the temp ID endpoint.
    pub fn temp_ids_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.temp_ids_path
        )
    }
}
