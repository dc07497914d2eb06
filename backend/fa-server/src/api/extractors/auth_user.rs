//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use fa_auth::{AuthError, JwtValidator};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The user id carried by a valid `Authorization: Bearer <jwt>` header.
///
/// The token is only checked for signature, expiry and subject format; handlers
/// that need the user record look it up themselves.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?
                .to_str()
                .map_err(|_| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = JwtValidator::bearer_token(header_value)?;
            let claims = state.jwt_validator.validate(token)?;
            let user_id = claims.user_id()?;

            log::debug!("Authenticated request for user {}", user_id);
            Ok(AuthUser(user_id))
        }
    }
}
