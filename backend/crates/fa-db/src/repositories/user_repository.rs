//! User repository: registration inserts and the descriptor scan used by face login.
//!
//! Descriptors are stored as a JSON array in a TEXT column. Rows are written once at
//! registration; there is no update or delete path.

use crate::{DbError, Result as DbErrorResult};

use fa_core::{DescriptorStore, EnrolledDescriptor, FaceDescriptor, User};

use std::panic::Location;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user together with its descriptor in a single statement.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let created_at = user.created_at.timestamp_millis();
        let face_descriptor = user
            .face_descriptor
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r#"
                INSERT INTO users (
                    id, name, username, password_hash, face_descriptor, created_at
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(face_descriptor)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => DbError::UsernameTaken {
                username: user.username.clone(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => DbError::from(e),
        })?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, username, password_hash, face_descriptor, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, username, password_hash, face_descriptor, created_at
                FROM users
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// All users with a non-empty descriptor, oldest registration first.
    pub async fn find_all_enrolled(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, username, password_hash, face_descriptor, created_at
                FROM users
                WHERE face_descriptor IS NOT NULL AND face_descriptor <> '[]'
                ORDER BY created_at, rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(Self::row_to_user)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    #[track_caller]
    fn row_to_user(row: &SqliteRow) -> DbErrorResult<User> {
        let id: String = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;
        let face_descriptor: Option<String> = row.try_get("face_descriptor")?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in users.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            name: row.try_get("name")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            face_descriptor: face_descriptor
                .map(|json| serde_json::from_str::<Vec<f64>>(&json).map(FaceDescriptor::new))
                .transpose()?,
            created_at: DateTime::from_timestamp_millis(created_at).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in users.created_at".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

#[async_trait]
impl DescriptorStore for UserRepository {
    type Error = DbError;

    async fn all_enrolled_descriptors(&self) -> DbErrorResult<Vec<EnrolledDescriptor>> {
        let users = self.find_all_enrolled().await?;

        Ok(users
            .into_iter()
            .filter_map(|user| {
                let identity = user.identity();
                user.face_descriptor
                    .filter(|descriptor| !descriptor.is_empty())
                    .map(|descriptor| EnrolledDescriptor {
                        identity,
                        descriptor,
                    })
            })
            .collect())
    }

    async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        UserRepository::find_by_username(self, username).await
    }
}
