#![allow(dead_code)]

//! Test infrastructure for fa-server API tests

use fa_config::Config;
use fa_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-at-least-32-characters-long";
pub const TEST_PASSWORD: &str = "correct horse";

/// Config with short descriptors and a limit no test will reach
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_JWT_SECRET.to_string());
    config.face.min_descriptor_length = 3;
    config.rate_limit.max_requests = 10000;
    config
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(create_test_config()).await
}

pub async fn create_test_app_state_with(config: Config) -> AppState {
    let pool = fa_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::from_config(pool, &config, None).expect("Failed to build test state")
}

/// Send one request through a fresh router, returning status and JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Registers `username` with the given descriptor and returns (token, user id)
pub async fn register_user(state: &AppState, username: &str, descriptor: &[f64]) -> (String, String) {
    let (status, json) = send(
        state,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": format!("Test {}", username),
            "username": username,
            "password": TEST_PASSWORD,
            "faceDescriptor": descriptor,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "register failed: {}", json);

    (
        json["token"].as_str().unwrap().to_string(),
        json["user"]["id"].as_str().unwrap().to_string(),
    )
}
