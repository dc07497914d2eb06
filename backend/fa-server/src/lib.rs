pub mod api;
pub mod auth_metrics;
pub mod cleanup;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    activity::{
        activity::{create_activity, list_activity},
        activity_dto::ActivityDto,
        activity_list_response::ActivityListResponse,
        activity_response::ActivityResponse,
        create_activity_request::CreateActivityRequest,
        list_activity_query::ListActivityQuery,
    },
    auth::{
        auth::{face_login, login, me, register},
        auth_response::AuthResponse,
        face_login_request::FaceLoginRequest,
        login_request::LoginRequest,
        me_response::MeResponse,
        register_request::RegisterRequest,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
};

pub use crate::auth_metrics::AuthMetrics;
pub use crate::routes::build_router;
pub use crate::state::AppState;
