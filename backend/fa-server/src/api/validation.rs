//! Request field checks shared by the handlers.
//!
//! Lengths are counted in characters, not bytes.

use crate::{ApiError, ApiResult};

/// Trim `value` and reject it if nothing is left.
#[track_caller]
pub fn require_non_empty<'a>(field: &str, value: &'a str) -> ApiResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(field, format!("{} is required", field)));
    }
    Ok(trimmed)
}

#[track_caller]
pub fn require_min_chars(field: &str, value: &str, min: usize) -> ApiResult<()> {
    if value.chars().count() < min {
        return Err(ApiError::validation(
            field,
            format!("{} must be at least {} characters", field, min),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn require_max_chars(field: &str, value: &str, max: usize) -> ApiResult<()> {
    if value.chars().count() > max {
        return Err(ApiError::validation(
            field,
            format!("{} must be at most {} characters", field, max),
        ));
    }
    Ok(())
}
