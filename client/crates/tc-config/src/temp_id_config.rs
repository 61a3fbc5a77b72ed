use crate::ConfigErrorResult;
use crate::bounds::check_range;

use std::ops::RangeInclusive;

use serde::Deserialize;

pub const MIN_VALID_COUNT_RANGE: RangeInclusive<usize> = 1..=100;
pub const DEFAULT_MIN_VALID_COUNT: usize = 3;

/// Local temp ID cache policy
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TempIdConfig {
    /// A background refill starts when fewer unexpired temp IDs than this are cached
    pub min_valid_count: usize,
}

impl Default for TempIdConfig {
    fn default() -> Self {
        Self {
            min_valid_count: DEFAULT_MIN_VALID_COUNT,
        }
    }
}

impl TempIdConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "temp_id.min_valid_count",
            self.min_valid_count,
            &MIN_VALID_COUNT_RANGE,
        )
    }
}
