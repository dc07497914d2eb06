use crate::UserDto;

use serde::Serialize;

/// Returned by register, login and face-login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}
