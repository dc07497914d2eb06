mod activity_log_config;
mod auth_config;
mod config;
mod database_config;
mod error;
mod face_config;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use activity_log_config::ActivityLogConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use face_config::FaceConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "FA_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".face-auth";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_FILENAME: &str = "face-auth.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_HOURS: u32 = 24;
const MIN_TOKEN_TTL_HOURS: u32 = 1;
const MAX_TOKEN_TTL_HOURS: u32 = 720;

const DEFAULT_FACE_THRESHOLD: f64 = 0.3;
const DEFAULT_MIN_DESCRIPTOR_LENGTH: usize = 128;
const MIN_MIN_DESCRIPTOR_LENGTH: usize = 1;
const MAX_MIN_DESCRIPTOR_LENGTH: usize = 4096;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
