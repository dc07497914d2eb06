use crate::AuthMetrics;
use crate::error::Result as ServerErrorResult;

use fa_auth::{AuthRateLimiter, JwtIssuer, JwtValidator, RateLimitConfig};
use fa_config::{ActivityLogConfig, Config, ConfigError, ValidationConfig};
use fa_core::{ActivityLog, ActivityLogWriter, FaceMatcher, MatcherConfig};
use fa_db::{ActivityLogRepository, DbError, UserRepository};

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared application state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub activity: ActivityLogRepository,
    /// All activity writes go through here
    pub activity_writer: Arc<dyn ActivityLogWriter<Error = DbError>>,
    pub matcher: FaceMatcher,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    /// Shared by register, login and face-login
    pub rate_limiter: Arc<AuthRateLimiter>,
    pub metrics: AuthMetrics,
    pub metrics_handle: Option<PrometheusHandle>,
    pub validation: ValidationConfig,
    pub activity_config: ActivityLogConfig,
    pub request_timeout: Duration,
}

impl AppState {
    /// Wire repositories, matcher and token handling from a validated config.
    pub fn from_config(
        pool: SqlitePool,
        config: &Config,
        metrics_handle: Option<PrometheusHandle>,
    ) -> ServerErrorResult<Self> {
        let secret = config
            .auth
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;

        let users = UserRepository::new(pool.clone());
        let activity = ActivityLogRepository::new(pool.clone());

        Ok(Self {
            users,
            activity_writer: Arc::new(activity.clone()),
            activity,
            matcher: FaceMatcher::new(MatcherConfig {
                threshold: config.face.threshold,
                min_descriptor_length: config.face.min_descriptor_length,
            }),
            jwt_issuer: Arc::new(JwtIssuer::with_hs256(
                secret.as_bytes(),
                chrono::Duration::hours(i64::from(config.auth.token_ttl_hours)),
            )),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            rate_limiter: Arc::new(AuthRateLimiter::new(RateLimitConfig {
                max_requests: config.rate_limit.max_requests,
                window_secs: config.rate_limit.window_secs,
            })),
            metrics: AuthMetrics::new(),
            metrics_handle,
            validation: config.validation.clone(),
            activity_config: config.activity_log.clone(),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            pool,
        })
    }

    /// Record an activity entry without failing the caller.
    pub async fn record_activity(&self, entry: ActivityLog) {
        if let Err(e) = self.activity_writer.record(&entry).await {
            warn!(
                "Failed to record '{}' activity for {}: {}",
                entry.action, entry.username, e
            );
        }
    }
}
