use fa_core::ActivityLog;

use serde::Serialize;

/// Activity log entry for JSON serialization
#[derive(Debug, Serialize)]
pub struct ActivityDto {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub action: String,
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Unix milliseconds
    pub timestamp: i64,
}

impl From<ActivityLog> for ActivityDto {
    fn from(log: ActivityLog) -> Self {
        Self {
            id: log.id.to_string(),
            user_id: log.user_id.to_string(),
            username: log.username,
            action: log.action,
            page: log.page,
            details: log.details,
            timestamp: log.timestamp.timestamp_millis(),
        }
    }
}
