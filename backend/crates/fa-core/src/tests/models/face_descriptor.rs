use crate::{CoreError, FaceDescriptor};

use googletest::prelude::*;

#[test]
fn given_descriptor_at_min_length_when_parsed_then_ok() {
    let result = FaceDescriptor::parse(vec![0.1; 128], 128);

    assert_that!(result, ok(anything()));
    assert_eq!(result.unwrap().len(), 128);
}

#[test]
fn given_longer_descriptor_when_parsed_then_ok() {
    let result = FaceDescriptor::parse(vec![0.1; 129], 128);

    assert_that!(result, ok(anything()));
}

#[test]
fn given_short_descriptor_when_parsed_then_invalid_descriptor() {
    let result = FaceDescriptor::parse(vec![0.1; 127], 128);

    assert!(matches!(result, Err(CoreError::InvalidDescriptor { .. })));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("at least 128"));
}

#[test]
fn given_nan_component_when_parsed_then_invalid_descriptor() {
    let mut values = vec![0.0; 4];
    values[2] = f64::NAN;

    let result = FaceDescriptor::parse(values, 4);

    assert!(matches!(result, Err(CoreError::InvalidDescriptor { .. })));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("element 2"));
}

#[test]
fn given_infinite_component_when_parsed_then_invalid_descriptor() {
    let result = FaceDescriptor::parse(vec![0.0, f64::INFINITY], 2);

    assert!(matches!(result, Err(CoreError::InvalidDescriptor { .. })));
}

#[test]
fn given_descriptor_when_serialized_then_plain_json_array() {
    let descriptor = FaceDescriptor::new(vec![0.5, -1.0, 2.25]);

    let json = serde_json::to_string(&descriptor).unwrap();

    assert_eq!(json, "[0.5,-1.0,2.25]");
}
