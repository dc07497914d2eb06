use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::Deserialize;

const REQUESTS_RANGE: RangeInclusive<u32> = 1..=10_000;
const WINDOW_SECS_RANGE: RangeInclusive<u64> = 1..=3600;

/// Credential-endpoint throttle: `max_requests` attempts per `window_secs`,
/// shared by register, login and face-login across the whole process.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 20,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !REQUESTS_RANGE.contains(&self.max_requests) {
            return Err(ConfigError::config(format!(
                "rate_limit.max_requests must be {}-{}, got {}",
                REQUESTS_RANGE.start(),
                REQUESTS_RANGE.end(),
                self.max_requests
            )));
        }

        if !WINDOW_SECS_RANGE.contains(&self.window_secs) {
            return Err(ConfigError::config(format!(
                "rate_limit.window_secs must be {}-{}, got {}",
                WINDOW_SECS_RANGE.start(),
                WINDOW_SECS_RANGE.end(),
                self.window_secs
            )));
        }

        Ok(())
    }
}
