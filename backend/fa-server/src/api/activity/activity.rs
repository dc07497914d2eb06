//! Activity feed REST API handlers

use crate::api::validation::{require_max_chars, require_non_empty};
use crate::{
    ActivityListResponse, ActivityResponse, ApiError, ApiResult, AppState, AuthUser,
    CreateActivityRequest, ListActivityQuery,
};

use fa_core::ActivityLog;
use fa_db::{ActivityLogFilter, DEFAULT_ACTIVITY_LIMIT};

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

const ALL_ACTIONS: &str = "all";

/// POST /api/activity
///
/// Record an action for the authenticated user.
pub async fn create_activity(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<CreateActivityRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ActivityResponse>)> {
    let Json(req) = payload?;

    let action = require_non_empty("action", &req.action)?;
    require_max_chars("action", action, state.validation.max_action_length)?;
    let page = req.page.trim();
    require_max_chars("page", page, state.validation.max_page_length)?;

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

    let mut entry = ActivityLog::new(user.id, user.username, action.to_string(), page.to_string());
    entry.details = req.details;

    state.activity_writer.record(&entry).await?;

    Ok((
        StatusCode::CREATED,
        Json(ActivityResponse {
            activity: entry.into(),
        }),
    ))
}

/// GET /api/activity?action=&search=&limit=
///
/// Newest entries first, across all users.
pub async fn list_activity(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    query: Result<Query<ListActivityQuery>, QueryRejection>,
) -> ApiResult<Json<ActivityListResponse>> {
    let Query(query) = query?;

    let filter = ActivityLogFilter {
        user_id: None,
        action: non_blank(query.action).filter(|action| !action.eq_ignore_ascii_case(ALL_ACTIONS)),
        search: non_blank(query.search),
        limit: page_limit(query.limit, state.activity_config.max_page_size)?,
    };

    let logs = state.activity.find(&filter).await?;

    Ok(Json(ActivityListResponse {
        activities: logs.into_iter().map(Into::into).collect(),
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Default when absent, clamped to `max`. Zero or negative is rejected.
#[track_caller]
pub(crate) fn page_limit(requested: Option<i64>, max: i64) -> ApiResult<i64> {
    match requested {
        None => Ok(DEFAULT_ACTIVITY_LIMIT.min(max)),
        Some(limit) if limit < 1 => Err(ApiError::validation(
            "limit",
            format!("limit must be at least 1, got {}", limit),
        )),
        Some(limit) => Ok(limit.min(max)),
    }
}
