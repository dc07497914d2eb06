use crate::ApiError;

use fa_auth::AuthError;
use fa_core::{CoreError, MatchError};
use fa_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: here(),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("username", "username must be at least 3 characters");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_non_validation_error_omits_field() {
    let (_, json) = body_json(ApiError::invalid_credentials()).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_username_taken_returns_409() {
    let error: ApiError = DbError::UsernameTaken {
        username: "alice".into(),
        location: here(),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "USERNAME_TAKEN");
}

#[tokio::test]
async fn test_database_error_hides_details() {
    let error: ApiError = DbError::Initialization {
        message: "Invalid UUID in users.id: secret detail".into(),
        location: here(),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_no_enrolled_users_returns_400() {
    let error: ApiError = MatchError::NoEnrolledUsers { location: here() }.into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "NO_ENROLLED_USERS");
    assert_eq!(
        json["error"]["message"],
        "No face data available to match against"
    );
}

#[tokio::test]
async fn test_no_match_returns_generic_401() {
    let error: ApiError = MatchError::NoMatch { location: here() }.into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "FACE_NOT_RECOGNIZED");
    assert_eq!(json["error"]["message"], "Face not recognized");
}

#[tokio::test]
async fn test_store_failure_returns_500_without_source() {
    let error: ApiError = MatchError::Store {
        source: Box::new(std::io::Error::other("disk on fire")),
        location: here(),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"]["message"].as_str().unwrap().contains("disk"));
}

#[tokio::test]
async fn test_invalid_descriptor_maps_to_face_descriptor_field() {
    let error: ApiError = CoreError::InvalidDescriptor {
        message: "descriptor must have at least 128 elements, got 3".into(),
        location: here(),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "faceDescriptor");
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: here(),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_token_errors_return_401_unauthorized() {
    for error in [
        AuthError::MissingHeader { location: here() },
        AuthError::TokenExpired { location: here() },
        AuthError::InvalidScheme { location: here() },
    ] {
        let (status, json) = body_json(error.into()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn test_password_hash_failure_returns_500() {
    let error: ApiError = AuthError::PasswordHash {
        message: "salt error".into(),
        location: here(),
    }
    .into();

    let (status, _) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_timeout_returns_408() {
    let (status, json) = body_json(ApiError::Timeout { location: here() }).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["error"]["code"], "REQUEST_TIMEOUT");
}
