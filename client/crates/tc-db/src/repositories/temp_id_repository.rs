use crate::{DbError, Result as DbErrorResult};

use tc_core::{ErrorLocation, StoreResult, TempId, TempIdStore};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sqlx::SqlitePool;

type TempIdRow = (String, i64, i64);

/// SQLite-backed temp ID cache. Timestamps are stored as epoch milliseconds.
pub struct TempIdRepository {
    pool: SqlitePool,
}

impl TempIdRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert `temp_id`. Returns false if a row with the same value already exists.
    pub async fn create(&self, temp_id: &TempId) -> DbErrorResult<bool> {
        let created_at = Utc::now().timestamp_millis();

        let result = sqlx::query(
            r#"
              INSERT INTO temp_ids (temp_id, valid_from, valid_until, created_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(temp_id) DO NOTHING
              "#,
        )
        .bind(&temp_id.temp_id)
        .bind(temp_id.valid_from.timestamp_millis())
        .bind(temp_id.valid_until.timestamp_millis())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        if !inserted {
            debug!("Temp ID already stored, insert ignored");
        }

        Ok(inserted)
    }

    /// All rows, most recently inserted first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<TempId>> {
        let rows: Vec<TempIdRow> = sqlx::query_as(
            r#"
              SELECT temp_id, valid_from, valid_until
              FROM temp_ids
              ORDER BY seq DESC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::from_row).collect()
    }

    pub async fn find_by_value(&self, value: &str) -> DbErrorResult<Option<TempId>> {
        let row: Option<TempIdRow> = sqlx::query_as(
            r#"
              SELECT temp_id, valid_from, valid_until
              FROM temp_ids
              WHERE temp_id = ?
              "#,
        )
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::from_row).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM temp_ids")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Remove every row. Returns the number of rows deleted.
    pub async fn delete_all(&self) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM temp_ids")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    fn from_row((temp_id, valid_from, valid_until): TempIdRow) -> DbErrorResult<TempId> {
        Ok(TempId {
            valid_from: Self::parse_millis(valid_from, "valid_from")?,
            valid_until: Self::parse_millis(valid_until, "valid_until")?,
            temp_id,
        })
    }

    fn parse_millis(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
        DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::InvalidRow {
            message: format!("{} out of range: {}", column, millis),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl TempIdStore for TempIdRepository {
    async fn get_all(&self) -> StoreResult<Vec<TempId>> {
        Ok(self.find_all().await?)
    }

    async fn save(&self, temp_id: &TempId) -> StoreResult<()> {
        self.create(temp_id).await?;
        Ok(())
    }

    async fn delete_all(&self) -> StoreResult<()> {
        TempIdRepository::delete_all(self).await?;
        Ok(())
    }
}
