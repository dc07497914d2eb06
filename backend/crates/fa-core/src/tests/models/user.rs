use crate::{FaceDescriptor, User};

use googletest::prelude::*;

fn user_with(descriptor: Option<FaceDescriptor>) -> User {
    User::new(
        "Ada Lovelace".to_string(),
        "ada".to_string(),
        "$argon2id$stub".to_string(),
        descriptor,
    )
}

#[test]
fn test_user_new_assigns_identity() {
    let user = user_with(Some(FaceDescriptor::new(vec![0.0; 3])));
    let other = user_with(None);

    assert_that!(user.name, eq("Ada Lovelace"));
    assert_that!(user.username, eq("ada"));
    assert_ne!(user.id, other.id);
}

#[test]
fn test_user_is_enrolled() {
    assert!(user_with(Some(FaceDescriptor::new(vec![0.0; 3]))).is_enrolled());
    assert!(!user_with(Some(FaceDescriptor::new(vec![]))).is_enrolled());
    assert!(!user_with(None).is_enrolled());
}

#[test]
fn test_identity_omits_credentials() {
    let user = user_with(None);

    let identity = user.identity();

    assert_that!(identity.id, eq(user.id));
    assert_that!(identity.username, eq(&user.username));
    let json = serde_json::to_value(&identity).unwrap();
    assert!(json.get("password_hash").is_none());
    assert!(json.get("face_descriptor").is_none());
}
