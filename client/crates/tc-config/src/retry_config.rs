use crate::ConfigErrorResult;
use crate::bounds::check_range;

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

pub const MAX_ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=10;
pub const INITIAL_DELAY_MS_RANGE: RangeInclusive<u64> = 10..=10_000;
pub const MAX_DELAY_SECS_RANGE: RangeInclusive<u64> = 1..=60;
pub const BACKOFF_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=10.0;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 100;
pub const DEFAULT_MAX_DELAY_SECS: u64 = 5;
pub const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_JITTER: bool = true;

/// How hard `tc ensure` tries before giving up on the first temp ID fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Fetch attempts in total, the first one included
    pub max_attempts: u32,
    /// Wait before the first retry
    pub initial_delay_ms: u64,
    /// Upper bound for any single wait
    pub max_delay_secs: u64,
    /// Growth factor of the wait between consecutive retries
    pub backoff_multiplier: f64,
    /// Scale each wait by a random factor in [0.5, 1.5)
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            max_delay_secs: DEFAULT_MAX_DELAY_SECS,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
            jitter: DEFAULT_JITTER,
        }
    }
}

impl RetryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range("retry.max_attempts", self.max_attempts, &MAX_ATTEMPTS_RANGE)?;
        check_range(
            "retry.initial_delay_ms",
            self.initial_delay_ms,
            &INITIAL_DELAY_MS_RANGE,
        )?;
        check_range(
            "retry.max_delay_secs",
            self.max_delay_secs,
            &MAX_DELAY_SECS_RANGE,
        )?;
        check_range(
            "retry.backoff_multiplier",
            self.backoff_multiplier,
            &BACKOFF_MULTIPLIER_RANGE,
        )?;

        Ok(())
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_secs(self.max_delay_secs)
    }

    /// Wait before retry number `retry` (1 = first retry), without jitter.
    ///
    /// Grows geometrically from `initial_delay` and never exceeds `max_delay`.
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(i32::MAX as u32) as i32;
        let secs = self.initial_delay().as_secs_f64() * self.backoff_multiplier.powi(exponent);

        Duration::from_secs_f64(secs.min(self.max_delay().as_secs_f64()))
    }
}
