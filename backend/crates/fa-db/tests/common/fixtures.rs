use fa_core::{ActivityLog, FaceDescriptor, User};
use fa_db::UserRepository;

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

/// Creates a test User with the given descriptor
pub fn create_test_user(username: &str, descriptor: Option<Vec<f64>>) -> User {
    User::new(
        format!("Test {}", username),
        username.to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        descriptor.map(FaceDescriptor::new),
    )
}

/// Inserts a user and returns it
pub async fn insert_test_user(
    pool: &SqlitePool,
    username: &str,
    descriptor: Option<Vec<f64>>,
) -> User {
    let user = create_test_user(username, descriptor);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

/// Creates an activity log entry `offset_secs` relative to now
pub fn create_test_activity_log_at(user: &User, action: &str, offset_secs: i64) -> ActivityLog {
    let mut log = ActivityLog::new(
        user.id,
        user.username.clone(),
        action.to_string(),
        "dashboard".to_string(),
    );
    log.timestamp = Utc::now() + Duration::seconds(offset_secs);
    log
}

