use uuid::Uuid;

pub const DEFAULT_ACTIVITY_LIMIT: i64 = 50;

/// Query parameters for the activity feed. `None` fields do not filter.
#[derive(Debug, Clone)]
pub struct ActivityLogFilter {
    pub user_id: Option<Uuid>,
    /// Exact action match
    pub action: Option<String>,
    /// Case-insensitive substring of username or action
    pub search: Option<String>,
    pub limit: i64,
}

impl Default for ActivityLogFilter {
    fn default() -> Self {
        Self {
            user_id: None,
            action: None,
            search: None,
            limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}
