//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::{StorageError, UrlRepository};
use crate::utils::db_error::is_unique_violation_on_alias;

/// PostgreSQL repository for URL storage.
///
/// Alias uniqueness is enforced by the `url_alias_key` unique constraint, so
/// concurrent saves of the same alias cannot both succeed.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        sqlx::query_scalar::<_, i64>("INSERT INTO url (url, alias) VALUES ($1, $2) RETURNING id")
            .bind(url)
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation_on_alias(&e) {
                    StorageError::AliasExists
                } else {
                    StorageError::Database(e)
                }
            })
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StorageError::NotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("DELETE FROM url WHERE alias = $1 RETURNING url")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StorageError::NotFound)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
