use fa_core::Identity;

use serde::Serialize;

/// Public user fields. Never carries the password hash or descriptor.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub username: String,
}

impl From<Identity> for UserDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name,
            username: identity.username,
        }
    }
}
