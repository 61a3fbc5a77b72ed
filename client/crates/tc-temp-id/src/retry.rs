use tc_config::RetryConfig;

use std::time::Duration;

/// Waits between attempts of the first-launch temp ID fetch.
///
/// Hands out one delay per retry the policy allows, then `None`.
#[derive(Debug, Clone)]
pub struct FetchBackoff {
    policy: RetryConfig,
    retries: u32,
}

impl FetchBackoff {
    pub fn new(policy: &RetryConfig) -> Self {
        Self {
            policy: policy.clone(),
            retries: 0,
        }
    }

    /// Fetch attempts made so far, the first one included.
    pub fn attempts(&self) -> u32 {
        self.retries + 1
    }

    /// Delay before the next fetch, or `None` once `max_attempts` is used up.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.attempts() >= self.policy.max_attempts {
            return None;
        }

        self.retries += 1;
        let delay = self.policy.backoff_delay(self.retries);

        Some(if self.policy.jitter {
            jittered(delay, rand::random::<f64>())
        } else {
            delay
        })
    }
}

/// Scale `delay` into `[0.5, 1.5)` of itself; `unit` is drawn from `[0, 1)`.
pub(crate) fn jittered(delay: Duration, unit: f64) -> Duration {
    delay.mul_f64(0.5 + unit)
}
