use crate::{
    ActivityLogConfig, AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, FaceConfig, LoggingConfig,
    RateLimitConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub face: FaceConfig,
    pub validation: ValidationConfig,
    pub rate_limit: RateLimitConfig,
    pub activity_log: ActivityLogConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FA_CONFIG_DIR env var, else use ./.face-auth/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply FA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FA_CONFIG_DIR env var > ./.face-auth/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration, reporting the first invalid field.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.face.validate()?;
        self.validation.validate()?;
        self.rate_limit.validate()?;
        self.activity_log.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s)",
            self.server.host, self.server.port, self.server.request_timeout_secs
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: HS256, secret {}, ttl={}h",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_hours
        );
        info!(
            "  face: threshold={}, min_descriptor_length={}",
            self.face.threshold, self.face.min_descriptor_length
        );
        info!(
            "  validation: username>={}, password>={}, name<={}",
            self.validation.min_username_length,
            self.validation.min_password_length,
            self.validation.max_name_length
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  activity_log: retention={}d, cleanup={}h, keep={}/user, page<={}",
            self.activity_log.retention_days,
            self.activity_log.cleanup_interval_hours,
            self.activity_log.max_entries_per_user,
            self.activity_log.max_page_size
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FA_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "FA_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );

        // Database
        Self::apply_env_string("FA_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FA_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("FA_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("FA_AUTH_TOKEN_TTL_HOURS", &mut self.auth.token_ttl_hours);

        // Face
        Self::apply_env_parse("FA_FACE_THRESHOLD", &mut self.face.threshold);
        Self::apply_env_parse(
            "FA_FACE_MIN_DESCRIPTOR_LENGTH",
            &mut self.face.min_descriptor_length,
        );

        // Validation
        Self::apply_env_parse(
            "FA_VALIDATION_MIN_USERNAME_LENGTH",
            &mut self.validation.min_username_length,
        );
        Self::apply_env_parse(
            "FA_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
        Self::apply_env_parse(
            "FA_VALIDATION_MAX_NAME_LENGTH",
            &mut self.validation.max_name_length,
        );

        // Rate limit
        Self::apply_env_parse(
            "FA_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "FA_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Activity Log
        Self::apply_env_parse(
            "FA_ACTIVITY_LOG_RETENTION_DAYS",
            &mut self.activity_log.retention_days,
        );
        Self::apply_env_parse(
            "FA_ACTIVITY_LOG_CLEANUP_INTERVAL_HOURS",
            &mut self.activity_log.cleanup_interval_hours,
        );
        Self::apply_env_parse(
            "FA_ACTIVITY_LOG_MAX_ENTRIES_PER_USER",
            &mut self.activity_log.max_entries_per_user,
        );
        Self::apply_env_parse(
            "FA_ACTIVITY_LOG_MAX_PAGE_SIZE",
            &mut self.activity_log.max_page_size,
        );

        // Logging
        Self::apply_env_parse("FA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FA_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
