use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known activity actions. Clients may record others.
pub struct ActivityAction;

impl ActivityAction {
    pub const REGISTER: &'static str = "register";
    pub const LOGIN: &'static str = "login";
    pub const FACE_LOGIN: &'static str = "face_login";
    pub const LOGOUT: &'static str = "logout";
    pub const DASHBOARD_ACCESS: &'static str = "dashboard_access";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: Uuid,

    pub user_id: Uuid,
    pub username: String,

    pub action: String,
    pub page: String,

    pub details: Option<serde_json::Value>,

    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    pub fn new(user_id: Uuid, username: String, action: String, page: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            username,
            action,
            page,
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
