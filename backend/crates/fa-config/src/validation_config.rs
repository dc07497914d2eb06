use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 64;
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 3;

pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 1000;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 100;

pub const DEFAULT_MAX_ACTION_LENGTH: usize = 64;
pub const DEFAULT_MAX_PAGE_LENGTH: usize = 256;

/// Validation configuration for field limits.
///
/// These limits are applied to request bodies before anything is stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum length for usernames at registration
    pub min_username_length: usize,
    /// Minimum length for passwords at registration
    pub min_password_length: usize,
    /// Maximum length for display names
    pub max_name_length: usize,
    /// Maximum length for activity action names
    pub max_action_length: usize,
    /// Maximum length for activity page names
    pub max_page_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_action_length: DEFAULT_MAX_ACTION_LENGTH,
            max_page_length: DEFAULT_MAX_PAGE_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_username_length < MIN_USERNAME_LENGTH
            || self.min_username_length > MAX_USERNAME_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.min_username_length must be {}-{}, got {}",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH, self.min_username_length
            )));
        }

        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.max_action_length == 0 {
            return Err(ConfigError::config(
                "validation.max_action_length must be at least 1",
            ));
        }

        if self.max_page_length == 0 {
            return Err(ConfigError::config(
                "validation.max_page_length must be at least 1",
            ));
        }

        Ok(())
    }
}
