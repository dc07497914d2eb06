use crate::{ActivityLogFilter, DbError, Result as DbErrorResult};

use fa_core::{ActivityLog, ActivityLogWriter};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

#[derive(Clone)]
pub struct ActivityLogRepository {
    pool: SqlitePool,
}

impl ActivityLogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, log: &ActivityLog) -> DbErrorResult<()> {
        let id = log.id.to_string();
        let user_id = log.user_id.to_string();
        let details = log.details.as_ref().map(serde_json::to_string).transpose()?;
        let timestamp = log.timestamp.timestamp_millis();

        sqlx::query(
            r#"
              INSERT INTO activity_log (
                  id, user_id, username, action, page, details, timestamp, search_text
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&log.username)
        .bind(&log.action)
        .bind(&log.page)
        .bind(details)
        .bind(timestamp)
        .bind(search_text(&log.username, &log.action))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Newest entries first, narrowed by `filter`.
    ///
    /// `search` is matched against a Unicode case-folded copy of username and action.
    pub async fn find(&self, filter: &ActivityLogFilter) -> DbErrorResult<Vec<ActivityLog>> {
        let user_id = filter.user_id.map(|id| id.to_string());

        let rows = sqlx::query(
            r#"
              SELECT id, user_id, username, action, page, details, timestamp
              FROM activity_log
              WHERE (?1 IS NULL OR user_id = ?1)
                AND (?2 IS NULL OR action = ?2)
                AND (?3 IS NULL OR instr(search_text, ?3) > 0)
              ORDER BY timestamp DESC, rowid DESC
              LIMIT ?4
            "#,
        )
        .bind(user_id)
        .bind(filter.action.as_deref())
        .bind(filter.search.as_deref().map(str::to_lowercase))
        .bind(filter.limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(Self::row_to_log)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn find_by_user(&self, user_id: Uuid, limit: i64) -> DbErrorResult<Vec<ActivityLog>> {
        self.find(&ActivityLogFilter {
            user_id: Some(user_id),
            limit,
            ..ActivityLogFilter::default()
        })
        .await
    }

    /// Distinct users that have at least one entry.
    pub async fn find_user_ids(&self) -> DbErrorResult<Vec<Uuid>> {
        let rows = sqlx::query("SELECT DISTINCT user_id FROM activity_log")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                let user_id: String = row.try_get("user_id")?;
                parse_uuid(&user_id, "activity_log.user_id")
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Keep only the newest `keep` entries for `user_id`. Returns the number removed.
    pub async fn prune_user(&self, user_id: Uuid, keep: i64) -> DbErrorResult<u64> {
        let user_id_str = user_id.to_string();

        let result = sqlx::query(
            r#"
              DELETE FROM activity_log
              WHERE user_id = ?1
                AND id NOT IN (
                    SELECT id FROM activity_log
                    WHERE user_id = ?1
                    ORDER BY timestamp DESC, rowid DESC
                    LIMIT ?2
                )
            "#,
        )
        .bind(user_id_str)
        .bind(keep)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Remove every entry older than `cutoff`. Returns the number removed.
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> DbErrorResult<u64> {
        let cutoff = cutoff.timestamp_millis();

        let result = sqlx::query("DELETE FROM activity_log WHERE timestamp < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[track_caller]
    fn row_to_log(row: &SqliteRow) -> DbErrorResult<ActivityLog> {
        let id: String = row.try_get("id")?;
        let user_id: String = row.try_get("user_id")?;
        let details: Option<String> = row.try_get("details")?;
        let timestamp: i64 = row.try_get("timestamp")?;

        Ok(ActivityLog {
            id: parse_uuid(&id, "activity_log.id")?,
            user_id: parse_uuid(&user_id, "activity_log.user_id")?,
            username: row.try_get("username")?,
            action: row.try_get("action")?,
            page: row.try_get("page")?,
            details: details
                .map(|json| serde_json::from_str(&json))
                .transpose()?,
            timestamp: DateTime::from_timestamp_millis(timestamp).ok_or_else(|| {
                DbError::Initialization {
                    message: "Invalid timestamp in activity_log.timestamp".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }
}

#[track_caller]
fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid UUID in {}: {}", column, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[async_trait]
impl ActivityLogWriter for ActivityLogRepository {
    type Error = DbError;

    async fn record(&self, entry: &ActivityLog) -> DbErrorResult<()> {
        self.create(entry).await
    }
}

/// Lowercased username and action, newline separated so a term can't span both.
fn search_text(username: &str, action: &str) -> String {
    format!("{}\n{}", username.to_lowercase(), action.to_lowercase())
}
