use crate::{
    EnrolledDescriptor, FaceDescriptor, FaceMatcher, Identity, MatchError, MatcherConfig,
};

use googletest::prelude::*;
use uuid::Uuid;

fn identity(username: &str) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: username.to_uppercase(),
        username: username.to_string(),
    }
}

fn enrolled(username: &str, values: Vec<f64>) -> EnrolledDescriptor {
    EnrolledDescriptor {
        identity: identity(username),
        descriptor: FaceDescriptor::new(values),
    }
}

fn matcher_with_threshold(threshold: f64) -> FaceMatcher {
    FaceMatcher::new(MatcherConfig {
        threshold,
        min_descriptor_length: 1,
    })
}

#[test]
fn given_only_self_enrolled_when_matching_own_descriptor_then_distance_zero() {
    let values = (0..128).map(|i| i as f64 / 128.0).collect::<Vec<_>>();
    let candidate = enrolled("alice", values.clone());
    let expected_id = candidate.identity.id;

    let result = FaceMatcher::default().best_match(&FaceDescriptor::new(values), vec![candidate]);

    let found = result.unwrap();
    assert_that!(found.identity.id, eq(expected_id));
    assert!(found.distance.abs() < 1e-12);
}

#[test]
fn given_no_candidates_when_matching_then_no_enrolled_users() {
    let query = FaceDescriptor::new(vec![0.0; 3]);

    let result = FaceMatcher::default().best_match(&query, Vec::new());

    assert!(matches!(result, Err(MatchError::NoEnrolledUsers { .. })));
}

#[test]
fn given_only_empty_descriptors_when_matching_then_no_enrolled_users() {
    let query = FaceDescriptor::new(vec![0.0; 3]);

    let result = FaceMatcher::default().best_match(&query, vec![enrolled("ghost", vec![])]);

    assert!(matches!(result, Err(MatchError::NoEnrolledUsers { .. })));
}

#[test]
fn given_distance_exactly_threshold_when_matching_then_accepted() {
    let matcher = matcher_with_threshold(0.5);
    let query = FaceDescriptor::new(vec![0.5, 0.0, 0.0]);
    let candidates = vec![
        enrolled("near", vec![0.0, 0.0, 0.0]),
        enrolled("far", vec![4.0, 4.0, 4.0]),
    ];

    let found = matcher.best_match(&query, candidates).unwrap();

    assert_that!(found.identity.username, eq("near"));
    assert_eq!(found.distance, 0.5);
}

#[test]
fn given_distance_just_over_threshold_when_matching_then_no_match() {
    let matcher = matcher_with_threshold(0.5);
    let query = FaceDescriptor::new(vec![0.5 + 1e-9, 0.0, 0.0]);

    let result = matcher.best_match(&query, vec![enrolled("near", vec![0.0, 0.0, 0.0])]);

    assert!(matches!(result, Err(MatchError::NoMatch { .. })));
}

#[test]
fn given_equidistant_candidates_when_matching_then_first_in_order_wins() {
    let matcher = matcher_with_threshold(5.0);
    let query = FaceDescriptor::new(vec![0.0, 0.0]);
    let first = enrolled("first", vec![3.0, 4.0]);
    let second = enrolled("second", vec![-3.0, -4.0]);

    let found = matcher
        .best_match(&query, vec![first.clone(), second.clone()])
        .unwrap();
    assert_that!(found.identity.username, eq("first"));

    let found = matcher.best_match(&query, vec![second, first]).unwrap();
    assert_that!(found.identity.username, eq("second"));
}

#[test]
fn given_length_mismatch_candidate_when_matching_then_never_chosen() {
    // Positionally the truncated candidate is identical to the query prefix.
    let matcher = matcher_with_threshold(0.3);
    let query = FaceDescriptor::new(vec![0.1, 0.2, 0.3, 0.4]);
    let truncated = enrolled("truncated", vec![0.1, 0.2, 0.3]);

    let result = matcher.best_match(&query, vec![truncated.clone()]);
    assert!(matches!(result, Err(MatchError::NoMatch { .. })));

    let proper = enrolled("proper", vec![0.1, 0.2, 0.3, 0.6]);
    let found = matcher.best_match(&query, vec![truncated, proper]).unwrap();
    assert_that!(found.identity.username, eq("proper"));
}

#[test]
fn given_two_enrolled_when_query_close_to_first_then_first_matched() {
    let matcher = FaceMatcher::default();
    let candidates = vec![
        enrolled("a", vec![0.0, 0.0, 0.0]),
        enrolled("b", vec![10.0, 10.0, 10.0]),
    ];

    let found = matcher
        .best_match(&FaceDescriptor::new(vec![0.0, 0.0, 0.2]), candidates)
        .unwrap();

    assert_that!(found.identity.username, eq("a"));
    assert!((found.distance - 0.2).abs() < 1e-12);
}

#[test]
fn given_two_enrolled_when_query_equidistant_and_far_then_no_match() {
    let matcher = FaceMatcher::default();
    let candidates = vec![
        enrolled("a", vec![0.0, 0.0, 0.0]),
        enrolled("b", vec![10.0, 10.0, 10.0]),
    ];

    let result = matcher.best_match(&FaceDescriptor::new(vec![5.0, 5.0, 5.0]), candidates);

    assert!(matches!(result, Err(MatchError::NoMatch { .. })));
}

#[test]
fn given_no_match_when_formatted_then_message_is_generic() {
    let matcher = FaceMatcher::default();
    let result = matcher.best_match(
        &FaceDescriptor::new(vec![1.0]),
        vec![enrolled("secret-user", vec![2.0])],
    );

    let err = result.unwrap_err();
    assert_that!(err.error_code(), eq("FACE_NOT_RECOGNIZED"));
    assert_that!(err.user_message(), eq("Face not recognized"));
    assert_that!(err.to_string(), not(contains_substring("secret-user")));
}

#[test]
fn given_configured_min_length_when_descriptor_from_then_enforced() {
    let matcher = FaceMatcher::default();

    assert_that!(matcher.descriptor_from(vec![0.0; 127]), err(anything()));
    assert_that!(matcher.descriptor_from(vec![0.0; 128]), ok(anything()));
}
