use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ContentType, ListEntry},
};

/// Persistent per-user watchlist membership
///
/// Implementations must enforce uniqueness of `(user_id, content_id)` themselves
/// and report a violation as [`AppError::Conflict`]: the service's
/// check-then-insert is not atomic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Persists a new entry and returns it as stored
    async fn insert(&self, entry: ListEntry) -> AppResult<ListEntry>;

    /// Removes the entry for the pair, returning whether a row was deleted
    async fn delete(&self, user_id: &str, content_id: &str) -> AppResult<bool>;

    async fn find_one(&self, user_id: &str, content_id: &str) -> AppResult<Option<ListEntry>>;

    /// Returns up to `take` entries after skipping `skip`, newest first with ties
    /// broken by ascending id, plus the user's total entry count
    async fn find_page(
        &self,
        user_id: &str,
        skip: u64,
        take: u32,
    ) -> AppResult<(Vec<ListEntry>, u64)>;
}

pub(crate) const DUPLICATE_ENTRY_MESSAGE: &str = "Item already exists in your list";

/// List store backed by the `my_list` table
#[derive(Clone)]
pub struct PgListStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct ListEntryRow {
    id: Uuid,
    user_id: String,
    content_id: String,
    content_type: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ListEntryRow> for ListEntry {
    type Error = AppError;

    fn try_from(row: ListEntryRow) -> Result<Self, Self::Error> {
        let content_type = ContentType::parse(&row.content_type).ok_or_else(|| {
            AppError::Internal(format!(
                "Unknown content type '{}' stored for entry {}",
                row.content_type, row.id
            ))
        })?;

        Ok(ListEntry {
            id: row.id,
            user_id: row.user_id,
            content_id: row.content_id,
            content_type,
            created_at: row.created_at,
        })
    }
}

impl PgListStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::warn!(error = %db_err, "Unique constraint rejected duplicate list entry");
            AppError::Conflict(DUPLICATE_ENTRY_MESSAGE.to_string())
        }
        other => AppError::Database(other),
    }
}

#[async_trait]
impl ListStore for PgListStore {
    async fn insert(&self, entry: ListEntry) -> AppResult<ListEntry> {
        let row = sqlx::query_as::<_, ListEntryRow>(
            "INSERT INTO my_list (id, user_id, content_id, content_type, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, user_id, content_id, content_type, created_at",
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(&entry.content_id)
        .bind(entry.content_type.as_str())
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        row.try_into()
    }

    async fn delete(&self, user_id: &str, content_id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM my_list WHERE user_id = $1 AND content_id = $2")
            .bind(user_id)
            .bind(content_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_one(&self, user_id: &str, content_id: &str) -> AppResult<Option<ListEntry>> {
        let row = sqlx::query_as::<_, ListEntryRow>(
            "SELECT id, user_id, content_id, content_type, created_at \
             FROM my_list WHERE user_id = $1 AND content_id = $2",
        )
        .bind(user_id)
        .bind(content_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ListEntry::try_from).transpose()
    }

    async fn find_page(
        &self,
        user_id: &str,
        skip: u64,
        take: u32,
    ) -> AppResult<(Vec<ListEntry>, u64)> {
        // Offsets past i64::MAX can only land on an empty page.
        let offset = i64::try_from(skip).unwrap_or(i64::MAX);

        // Count and page read from one snapshot so `total` matches the rows.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM my_list WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, ListEntryRow>(
            "SELECT id, user_id, content_id, content_type, created_at \
             FROM my_list WHERE user_id = $1 \
             ORDER BY created_at DESC, id ASC \
             OFFSET $2 LIMIT $3",
        )
        .bind(user_id)
        .bind(offset)
        .bind(i64::from(take))
        .fetch_all(&mut *tx)
        .await?;
        tx.commit().await?;

        let entries = rows
            .into_iter()
            .map(ListEntry::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok((entries, total.max(0) as u64))
    }
}
