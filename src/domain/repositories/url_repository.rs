//! Repository trait for URL storage.

use async_trait::async_trait;

/// Failure kinds reported by a [`UrlRepository`].
///
/// `NotFound` and `AliasExists` are expected outcomes driven by input;
/// `Database` is an opaque backend failure.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("url not found")]
    NotFound,

    #[error("url exists")]
    AliasExists,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage port for alias → URL mappings.
///
/// Aliases are unique: implementations must reject a save for an alias that is
/// already stored, including when two saves race for the same alias.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Saves `url` under `alias` and returns the storage-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already stored.
    /// Returns [`StorageError::Database`] on backend errors.
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record has this alias.
    /// Returns [`StorageError::Database`] on backend errors.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Deletes the record stored under `alias` and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no record has this alias.
    /// Returns [`StorageError::Database`] on backend errors.
    async fn delete_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
