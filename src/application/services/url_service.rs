//! Save, resolve, and remove operations over the URL storage port.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias_generator::generate_alias;

/// Message reported when a save fails for a reason other than a taken alias.
pub const SAVE_FAILED: &str = "failed to add url";

/// Message reported when a lookup or delete fails for a reason other than a
/// missing alias.
pub const INTERNAL_ERROR: &str = "internal error";

/// Service for saving, resolving, and removing aliased URLs.
///
/// Every call goes straight to storage; nothing is cached in-process.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    alias_length: usize,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `alias_length` is the length of generated aliases.
    pub fn new(repository: Arc<dyn UrlRepository>, alias_length: usize) -> Self {
        Self {
            repository,
            alias_length,
        }
    }

    /// Saves `url` under `alias`, generating an alias when none is given.
    ///
    /// An empty alias counts as not given. A generated alias that collides
    /// with a stored one is reported like any other taken alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already stored.
    /// Returns [`AppError::Internal`] on any other storage failure.
    pub async fn save_url(&self, url: String, alias: Option<String>) -> Result<UrlRecord, AppError> {
        let alias = match alias {
            Some(alias) if !alias.is_empty() => alias,
            _ => generate_alias(self.alias_length),
        };
        let new_record = NewUrlRecord { url, alias };

        let id = self
            .repository
            .save_url(&new_record.url, &new_record.alias)
            .await
            .map_err(|e| match e {
                StorageError::AliasExists => AppError::AliasExists,
                other => AppError::internal(SAVE_FAILED, other),
            })?;

        Ok(UrlRecord::new(id, new_record.alias, new_record.url))
    }

    /// Resolves an alias to its stored URL. Read-only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] for an empty alias without
    /// touching storage.
    /// Returns [`AppError::NotFound`] if the alias is not stored.
    /// Returns [`AppError::Internal`] on any other storage failure.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::InvalidRequest);
        }

        self.repository
            .get_url(alias)
            .await
            .map_err(lookup_error)
    }

    /// Deletes the record stored under `alias` and returns its URL.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn remove(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            return Err(AppError::InvalidRequest);
        }

        self.repository
            .delete_url(alias)
            .await
            .map_err(lookup_error)
    }

    /// Checks that storage is reachable.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        self.repository.ping().await
    }
}

fn lookup_error(e: StorageError) -> AppError {
    match e {
        StorageError::NotFound => AppError::NotFound,
        other => AppError::internal(INTERNAL_ERROR, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    fn service(repo: MockUrlRepository) -> UrlService {
        UrlService::new(Arc::new(repo), 6)
    }

    #[tokio::test]
    async fn test_save_with_alias() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save_url()
            .withf(|url, alias| url == "https://google.com" && alias == "test_alias")
            .times(1)
            .returning(|_, _| Ok(1));

        let record = service(mock_repo)
            .save_url(
                "https://google.com".to_string(),
                Some("test_alias".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.alias, "test_alias");
        assert_eq!(record.url, "https://google.com");
    }

    #[tokio::test]
    async fn test_save_without_alias_generates_one() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save_url()
            .withf(|_, alias| alias.len() == 6 && alias.chars().all(|c| c.is_ascii_alphanumeric()))
            .times(1)
            .returning(|_, _| Ok(7));

        let record = service(mock_repo)
            .save_url("https://google.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.alias.len(), 6);
    }

    #[tokio::test]
    async fn test_save_empty_alias_generates_one() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save_url()
            .withf(|_, alias| alias.len() == 10)
            .times(1)
            .returning(|_, _| Ok(1));

        let service = UrlService::new(Arc::new(mock_repo), 10);
        let record = service
            .save_url("https://google.com".to_string(), Some(String::new()))
            .await
            .unwrap();

        assert_eq!(record.alias.len(), 10);
    }

    #[tokio::test]
    async fn test_save_alias_exists() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save_url()
            .times(1)
            .returning(|_, _| Err(StorageError::AliasExists));

        let result = service(mock_repo)
            .save_url("https://google.com".to_string(), Some("taken".to_string()))
            .await;

        assert!(matches!(result, Err(AppError::AliasExists)));
    }

    #[tokio::test]
    async fn test_save_storage_failure() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save_url()
            .times(1)
            .returning(|_, _| Err(StorageError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(mock_repo)
            .save_url("https://google.com".to_string(), Some("test_alias".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), SAVE_FAILED);
    }

    #[tokio::test]
    async fn test_resolve_existing_alias() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_get_url()
            .withf(|alias| alias == "test_alias")
            .times(1)
            .returning(|_| Ok("https://www.google.com/".to_string()));

        let url = service(mock_repo).resolve("test_alias").await.unwrap();
        assert_eq!(url, "https://www.google.com/");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_get_url()
            .times(1)
            .returning(|_| Err(StorageError::NotFound));

        let result = service(mock_repo).resolve("non_existent_alias").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_resolve_storage_failure() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_get_url()
            .times(1)
            .returning(|_| Err(StorageError::Database(sqlx::Error::PoolClosed)));

        let err = service(mock_repo).resolve("test_alias").await.unwrap_err();
        assert_eq!(err.to_string(), INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_resolve_empty_alias_skips_storage() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_get_url().times(0);

        let result = service(mock_repo).resolve("").await;
        assert!(matches!(result, Err(AppError::InvalidRequest)));
    }

    #[tokio::test]
    async fn test_remove_existing_alias() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete_url()
            .withf(|alias| alias == "test_alias")
            .times(1)
            .returning(|_| Ok("https://www.google.com/".to_string()));

        let url = service(mock_repo).remove("test_alias").await.unwrap();
        assert_eq!(url, "https://www.google.com/");
    }

    #[tokio::test]
    async fn test_remove_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete_url()
            .times(1)
            .returning(|_| Err(StorageError::NotFound));

        let result = service(mock_repo).remove("non_existent_alias").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_remove_storage_failure() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete_url()
            .times(1)
            .returning(|_| Err(StorageError::Database(sqlx::Error::PoolClosed)));

        let err = service(mock_repo).remove("test_alias").await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
        assert_eq!(err.to_string(), INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_remove_empty_alias_skips_storage() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_delete_url().times(0);

        let result = service(mock_repo).remove("").await;
        assert!(matches!(result, Err(AppError::InvalidRequest)));
    }
}
