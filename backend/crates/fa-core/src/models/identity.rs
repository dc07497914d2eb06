use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of a registered user: what the matcher and the auth endpoints hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub username: String,
}
