use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    /// Action name, e.g. "dashboard_access" (required)
    #[serde(default)]
    pub action: String,

    /// Page the action happened on
    #[serde(default)]
    pub page: String,

    /// Optional free-form payload
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
