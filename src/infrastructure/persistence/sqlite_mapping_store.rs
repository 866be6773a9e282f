//! SQLite implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Row shape for the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    token: String,
    original_url: String,
    visits: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.token, row.original_url, row.visits, row.created_at)
    }
}

/// SQLite store for token→URL mappings.
///
/// Uses SQLx prepared statements with runtime parameter binding.
pub struct SqliteMappingStore {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingStore for SqliteMappingStore {
    async fn insert(&self, record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let row: UrlRow = sqlx::query_as(
            r#"
            INSERT INTO urls (token, original_url, visits, created_at)
            VALUES (?1, ?2, 0, ?3)
            RETURNING token, original_url, visits, created_at
            "#,
        )
        .bind(&record.token)
        .bind(&record.original_url)
        .bind(record.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<UrlRecord>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT token, original_url, visits, created_at
            FROM urls
            WHERE token = ?1
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_visits(&self, token: &str) -> Result<bool, AppError> {
        // Single in-place UPDATE; the database serializes concurrent increments.
        let result = sqlx::query("UPDATE urls SET visits = visits + 1 WHERE token = ?1")
            .bind(token)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
