//! Authentication REST API handlers
//!
//! Register, password login, face login and the current-user lookup.

use crate::api::error::FACE_DESCRIPTOR_FIELD;
use crate::api::validation::{require_max_chars, require_min_chars, require_non_empty};
use crate::{
    ApiError, ApiResult, AppState, AuthResponse, AuthUser, FaceLoginRequest, LoginRequest,
    MeResponse, RegisterRequest,
};

use fa_auth::{hash_password, verify_password};
use fa_core::{ActivityAction, ActivityLog, FaceDescriptor, Identity, MatchError, User};

use std::panic::Location;
use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;
use log::info;

const AUTH_PAGE: &str = "auth";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/register
///
/// Create a user together with its face enrollment and return a session token.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    state.rate_limiter.check()?;
    let Json(req) = payload?;

    let name = require_non_empty("name", &req.name)?.to_string();
    require_max_chars("name", &name, state.validation.max_name_length)?;

    let username = require_non_empty("username", &req.username)?.to_string();
    require_min_chars("username", &username, state.validation.min_username_length)?;

    require_min_chars("password", &req.password, state.validation.min_password_length)?;

    let descriptor = parse_descriptor(&state, req.face_descriptor)?;

    if state.users.find_by_username(&username).await?.is_some() {
        return Err(ApiError::Conflict {
            code: "USERNAME_TAKEN",
            message: "Username already exists".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

    let user = User::new(name, username, password_hash, Some(descriptor));
    // A concurrent registration can still win the race; the UNIQUE constraint decides
    state.users.create(&user).await?;

    info!("Registered user {} ({})", user.username, user.id);
    state.metrics.register_success();
    state
        .record_activity(activity_for(&user.identity(), ActivityAction::REGISTER))
        .await;

    let response = issue_session(&state, user.identity())?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
///
/// Username and password login. Unknown users and wrong passwords are indistinguishable.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    state.rate_limiter.check()?;
    let Json(req) = payload?;

    let username = require_non_empty("username", &req.username)?;
    if req.password.is_empty() {
        return Err(ApiError::validation("password", "password is required"));
    }

    let Some(user) = state.users.find_by_username(username).await? else {
        state.metrics.login_failure();
        return Err(ApiError::invalid_credentials());
    };

    let password = req.password;
    let stored_hash = user.password_hash.clone();
    let verified =
        tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash)).await??;

    if !verified {
        state.metrics.login_failure();
        return Err(ApiError::invalid_credentials());
    }

    info!("Password login for {}", user.username);
    state.metrics.login_success();

    let identity = user.identity();
    state
        .record_activity(activity_for(&identity, ActivityAction::LOGIN))
        .await;

    Ok(Json(issue_session(&state, identity)?))
}

/// POST /api/auth/face-login
///
/// Match the submitted descriptor against every enrolled user.
pub async fn face_login(
    State(state): State<AppState>,
    payload: Result<Json<FaceLoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    state.rate_limiter.check()?;
    let Json(req) = payload?;

    let query = parse_descriptor(&state, req.face_descriptor)?;

    let started = Instant::now();
    let result = state.matcher.identify(&state.users, &query).await;
    state.metrics.face_scan_duration(started.elapsed());

    let face_match = match result {
        Ok(face_match) => face_match,
        Err(e) => {
            match e {
                MatchError::NoEnrolledUsers { .. } => state.metrics.face_login_no_enrolled(),
                MatchError::NoMatch { .. } => state.metrics.face_login_no_match(),
                MatchError::Store { .. } => {}
            }
            return Err(e.into());
        }
    };

    info!("Face login for {}", face_match.identity.username);
    state.metrics.face_login_matched();
    state
        .record_activity(activity_for(&face_match.identity, ActivityAction::FACE_LOGIN))
        .await;

    Ok(Json(issue_session(&state, face_match.identity)?))
}

/// GET /api/auth/me
///
/// The user behind the bearer token.
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<MeResponse>> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

    Ok(Json(MeResponse {
        user: user.identity().into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn parse_descriptor(state: &AppState, values: Option<Vec<f64>>) -> ApiResult<FaceDescriptor> {
    let values = values.ok_or_else(|| {
        ApiError::validation(FACE_DESCRIPTOR_FIELD, "Face descriptor is required")
    })?;

    Ok(state.matcher.descriptor_from(values)?)
}

fn issue_session(state: &AppState, identity: Identity) -> ApiResult<AuthResponse> {
    let token = state.jwt_issuer.issue(identity.id)?;

    Ok(AuthResponse {
        token,
        user: identity.into(),
    })
}

fn activity_for(identity: &Identity, action: &str) -> ActivityLog {
    ActivityLog::new(
        identity.id,
        identity.username.clone(),
        action.to_string(),
        AUTH_PAGE.to_string(),
    )
}
