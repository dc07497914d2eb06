//! User entity - a registered identity with its credential and face enrollment.

use crate::{FaceDescriptor, Identity};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// The descriptor is attached at registration and never updated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique login name
    pub username: String,
    /// Argon2 PHC string, opaque to everything outside fa-auth
    pub password_hash: String,
    pub face_descriptor: Option<FaceDescriptor>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: String,
        username: String,
        password_hash: String,
        face_descriptor: Option<FaceDescriptor>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            username,
            password_hash,
            face_descriptor,
            created_at: Utc::now(),
        }
    }

    /// True when the user has a non-empty face descriptor on file
    pub fn is_enrolled(&self) -> bool {
        self.face_descriptor
            .as_ref()
            .is_some_and(|descriptor| !descriptor.is_empty())
    }

    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
        }
    }
}
