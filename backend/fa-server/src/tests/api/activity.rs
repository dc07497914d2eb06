use crate::api::activity::activity::page_limit;

use googletest::prelude::*;

#[test]
fn given_no_limit_when_paging_then_default_fifty() {
    assert_that!(page_limit(None, 200).unwrap(), eq(50));
}

#[test]
fn given_limit_over_max_when_paging_then_capped() {
    assert_that!(page_limit(Some(1000), 200).unwrap(), eq(200));
}

#[test]
fn given_small_max_when_paging_without_limit_then_default_capped_too() {
    assert_that!(page_limit(None, 10).unwrap(), eq(10));
}

#[test]
fn given_non_positive_limit_when_paging_then_error() {
    assert_that!(page_limit(Some(0), 200), err(anything()));
    assert_that!(page_limit(Some(-5), 200), err(anything()));
}
