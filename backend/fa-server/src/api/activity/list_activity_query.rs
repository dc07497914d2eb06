use serde::Deserialize;

/// Query parameters for GET /api/activity
#[derive(Debug, Deserialize, Default)]
pub struct ListActivityQuery {
    /// Exact action, or "all"
    pub action: Option<String>,
    /// Case-insensitive substring of username or action
    pub search: Option<String>,
    pub limit: Option<i64>,
}
