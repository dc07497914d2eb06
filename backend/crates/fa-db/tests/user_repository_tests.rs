mod common;

use common::{create_test_pool, create_test_user, insert_test_user};

use fa_core::{DescriptorStore, FaceDescriptor, User};
use fa_db::{DbError, UserRepository};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_new_user_when_created_then_can_be_found_by_username() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = create_test_user("alice", Some(vec![0.25; 128]));

    // When
    repo.create(&user).await.unwrap();

    // Then
    let found = repo.find_by_username("alice").await.unwrap();
    assert_that!(found, some(anything()));
    let found = found.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.name, eq(&user.name));
    assert_that!(found.password_hash, eq(&user.password_hash));
    assert_eq!(found.face_descriptor, user.face_descriptor);
    assert_eq!(
        found.created_at.timestamp_millis(),
        user.created_at.timestamp_millis()
    );
}

#[tokio::test]
async fn given_stored_descriptor_when_read_back_then_values_are_verbatim() {
    // Given: values that do not survive naive float formatting
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let values = vec![0.1, -0.000_012_345_678_9, 1.0 / 3.0, 123_456.789, f64::MIN_POSITIVE];
    let user = create_test_user("precise", Some(values.clone()));

    // When
    repo.create(&user).await.unwrap();

    // Then
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.face_descriptor.unwrap().into_inner(), values);
}

#[tokio::test]
async fn given_existing_username_when_created_again_then_username_taken() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    insert_test_user(&pool, "bob", Some(vec![0.0; 128])).await;

    // When
    let duplicate = create_test_user("bob", Some(vec![1.0; 128]));
    let result = repo.create(&duplicate).await;

    // Then
    assert!(matches!(result, Err(DbError::UsernameTaken { .. })));
    assert_that!(repo.find_by_id(duplicate.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_unknown_user_when_finding_then_none() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    assert_that!(repo.find_by_username("nobody").await.unwrap(), none());
    assert_that!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), none());
}

#[tokio::test]
async fn given_mixed_enrollment_when_scanning_then_only_enrolled_returned() {
    // Given: one enrolled, one without descriptor, one with an empty descriptor
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    let enrolled = insert_test_user(&pool, "enrolled", Some(vec![0.5; 128])).await;
    insert_test_user(&pool, "faceless", None).await;
    insert_test_user(&pool, "empty", Some(vec![])).await;

    // When
    let descriptors = repo.all_enrolled_descriptors().await.unwrap();

    // Then
    assert_that!(descriptors, len(eq(1)));
    assert_that!(descriptors[0].identity.id, eq(enrolled.id));
    assert_that!(descriptors[0].identity.username, eq("enrolled"));
    assert_eq!(descriptors[0].descriptor, FaceDescriptor::new(vec![0.5; 128]));
}

#[tokio::test]
async fn given_several_enrolled_when_scanning_then_registration_order() {
    // Given
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    let mut users: Vec<User> = Vec::new();
    for name in ["first", "second", "third"] {
        users.push(insert_test_user(&pool, name, Some(vec![0.0; 3])).await);
    }

    // When
    let descriptors = repo.all_enrolled_descriptors().await.unwrap();

    // Then
    let ids = descriptors.iter().map(|d| d.identity.id).collect::<Vec<_>>();
    assert_eq!(ids, users.iter().map(|u| u.id).collect::<Vec<_>>());
}

#[tokio::test]
async fn given_empty_database_when_scanning_then_empty() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    assert_that!(repo.all_enrolled_descriptors().await.unwrap(), is_empty());
}

#[tokio::test]
async fn given_store_trait_when_finding_by_username_then_delegates() {
    let pool = create_test_pool().await;
    let user = insert_test_user(&pool, "carol", None).await;
    let store: &dyn DescriptorStore<Error = DbError> = &UserRepository::new(pool);

    let found = store.find_by_username("carol").await.unwrap();

    assert_that!(found.map(|u| u.id), some(eq(user.id)));
}
