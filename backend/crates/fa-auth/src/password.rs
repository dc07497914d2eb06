//! Argon2id password hashing.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Hash `password` into a PHC string with a fresh random salt.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let location = Location::caller();

    // v4 UUIDs carry 122 bits from the OS RNG, enough for a salt
    let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes()).map_err(|e| {
        AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(location),
        }
    })?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(location),
        })
}

/// Check `password` against a stored PHC string.
///
/// A wrong password is `Ok(false)`; only a malformed hash is an error.
#[track_caller]
pub fn verify_password(password: &str, password_hash: &str) -> AuthErrorResult<bool> {
    let location = Location::caller();

    let parsed = PasswordHash::new(password_hash).map_err(|e| AuthError::PasswordHash {
        message: format!("stored hash is malformed: {}", e),
        location: ErrorLocation::from(location),
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(location),
        }),
    }
}
