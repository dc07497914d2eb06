use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MAX_PAGE_SIZE_LIMIT: i64 = 1000;
pub const MAX_RETENTION_DAYS: u32 = 36_500;

// Activity log retention configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLogConfig {
    /// Number of days to retain activity logs (default: 90)
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,

    /// Cleanup interval in hours (default: 24)
    #[serde(default = "default_cleanup_interval_hours")]
    pub cleanup_interval_hours: u32,

    /// Entries kept per user by the cleanup task (default: 50)
    #[serde(default = "default_max_entries_per_user")]
    pub max_entries_per_user: i64,

    /// Upper bound for `limit` on the feed endpoint (default: 200)
    #[serde(default = "default_max_page_size")]
    pub max_page_size: i64,
}

fn default_retention_days() -> u32 {
    90
}

fn default_cleanup_interval_hours() -> u32 {
    24
}

fn default_max_entries_per_user() -> i64 {
    50
}

fn default_max_page_size() -> i64 {
    200
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
            cleanup_interval_hours: default_cleanup_interval_hours(),
            max_entries_per_user: default_max_entries_per_user(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl ActivityLogConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.retention_days == 0 || self.retention_days > MAX_RETENTION_DAYS {
            return Err(ConfigError::config(format!(
                "activity_log.retention_days must be 1-{}, got {}",
                MAX_RETENTION_DAYS, self.retention_days
            )));
        }

        if self.cleanup_interval_hours == 0 {
            return Err(ConfigError::config(
                "activity_log.cleanup_interval_hours must be at least 1",
            ));
        }

        if self.max_entries_per_user < 1 {
            return Err(ConfigError::config(format!(
                "activity_log.max_entries_per_user must be at least 1, got {}",
                self.max_entries_per_user
            )));
        }

        if self.max_page_size < 1 || self.max_page_size > MAX_PAGE_SIZE_LIMIT {
            return Err(ConfigError::config(format!(
                "activity_log.max_page_size must be 1-{}, got {}",
                MAX_PAGE_SIZE_LIMIT, self.max_page_size
            )));
        }

        Ok(())
    }
}
