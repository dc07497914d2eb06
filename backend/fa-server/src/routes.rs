use crate::{
    ApiError, AppState, create_activity, face_login, health, list_activity, login, me, register,
};

use std::panic::Location;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    routing::{get, post},
};
use error_location::ErrorLocation;
use tower::ServiceBuilder;
use tower::timeout::error::Elapsed;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/face-login", post(face_login))
        .route("/me", get(me));

    Router::new()
        .nest("/api/auth", auth_routes)
        .route("/api/activity", get(list_activity).post(create_activity))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_export))
        // Add shared state
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        // CORS middleware (the browser frontend runs on another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::Timeout {
            location: ErrorLocation::from(Location::caller()),
        }
    } else {
        ApiError::Internal {
            message: format!("Unhandled middleware error: {}", err),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
