use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_HOURS, MAX_TOKEN_TTL_HOURS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_HOURS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required, never logged.
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret.as_deref() {
            None => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set it in config.toml or FA_AUTH_JWT_SECRET)",
                ));
            }
            Some(secret) if secret.chars().count() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if self.token_ttl_hours < MIN_TOKEN_TTL_HOURS || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_hours must be {}-{}, got {}",
                MIN_TOKEN_TTL_HOURS, MAX_TOKEN_TTL_HOURS, self.token_ttl_hours
            )));
        }

        Ok(())
    }
}
