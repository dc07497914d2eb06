//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use fa_auth::AuthError;
use fa_core::{CoreError, MatchError};
use fa_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const FACE_DESCRIPTOR_FIELD: &str = "faceDescriptor";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Malformed or unserviceable request (400)
    #[error("Bad request [{code}]: {message} {location}")]
    BadRequest {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized [{code}]: {message} {location}")]
    Unauthorized {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict [{code}]: {message} {location}")]
    Conflict {
        code: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// Rate limit exceeded (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Request exceeded the configured deadline (408)
    #[error("Request timed out {location}")]
    Timeout { location: ErrorLocation },

    /// Internal server error (500). `message` is shown to clients.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field-level validation failure
    #[track_caller]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Generic 401 for token problems
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            code: "UNAUTHORIZED",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Same response for unknown user and wrong password
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized {
            code: "INVALID_CREDENTIALS",
            message: "Invalid username or password".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { code, message, .. }
            | ApiError::Unauthorized { code, message, .. }
            | ApiError::Conflict { code, message, .. } => ApiErrorBody {
                code: code.into(),
                message,
                field: None,
            },
            ApiError::TooManyRequests { message, .. } => ApiErrorBody {
                code: "RATE_LIMITED".into(),
                message,
                field: None,
            },
            ApiError::Timeout { .. } => ApiErrorBody {
                code: "REQUEST_TIMEOUT".into(),
                message: "Request timed out".into(),
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UsernameTaken { .. } => ApiError::Conflict {
                code: "USERNAME_TAKEN",
                message: "Username already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            // Don't expose internal database details to clients
            other => {
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { field, message, .. } => ApiError::Validation {
                message,
                field: Some(field),
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidDescriptor { message, .. } => ApiError::Validation {
                message,
                field: Some(FACE_DESCRIPTOR_FIELD.to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Matcher failures keep their generic user-facing message
impl From<MatchError> for ApiError {
    #[track_caller]
    fn from(e: MatchError) -> Self {
        let message = e.user_message().to_string();
        match e {
            MatchError::NoEnrolledUsers { .. } => ApiError::BadRequest {
                code: "NO_ENROLLED_USERS",
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            MatchError::NoMatch { .. } => ApiError::Unauthorized {
                code: "FACE_NOT_RECOGNIZED",
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            MatchError::Store { .. } => {
                log::error!("Face match failed: {}", e);
                ApiError::Internal {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::TooManyRequests {
                message: format!(
                    "Too many attempts ({} per {}s), try again later",
                    limit, window_secs
                ),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::MissingHeader { .. } => {
                ApiError::unauthorized("Missing authorization header")
            }
            AuthError::TokenExpired { .. } => ApiError::unauthorized("Token expired"),
            ref other if other.is_client_error() => {
                log::debug!("Rejected token: {}", other);
                ApiError::unauthorized("Invalid or expired token")
            }
            other => {
                log::error!("Auth failure: {}", other);
                ApiError::Internal {
                    message: "Authentication failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            code: "BAD_REQUEST",
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            code: "BAD_REQUEST",
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    #[track_caller]
    fn from(e: tokio::task::JoinError) -> Self {
        log::error!("Blocking task failed: {}", e);
        ApiError::Internal {
            message: "Internal error".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
