use crate::ApiError;
use crate::api::validation::{require_max_chars, require_min_chars, require_non_empty};

use googletest::prelude::*;

#[test]
fn given_padded_value_when_required_then_trimmed() {
    assert_that!(require_non_empty("name", "  Ada  ").unwrap(), eq("Ada"));
}

#[test]
fn given_whitespace_only_when_required_then_validation_error_names_field() {
    let result = require_non_empty("name", "   ");

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "name"
    ));
}

#[test]
fn given_multibyte_value_when_checking_min_then_counts_characters() {
    // three characters, nine bytes
    assert_that!(require_min_chars("username", "日本語", 3), ok(anything()));
    assert_that!(require_min_chars("username", "日本", 3), err(anything()));
}

#[test]
fn given_value_at_max_when_checking_max_then_ok() {
    assert_that!(require_max_chars("action", &"a".repeat(64), 64), ok(anything()));
    assert_that!(require_max_chars("action", &"a".repeat(65), 64), err(anything()));
}
