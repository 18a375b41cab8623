//! In-process implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StorageError, UrlRepository};

/// URL repository backed by a [`DashMap`].
///
/// Saves go through the entry API, so check-and-insert for an alias is atomic
/// with respect to other saves of the same alias. Ids come from a monotonic
/// counter and are never reused, even after a delete.
///
/// Contents are lost when the process exits.
#[derive(Debug)]
pub struct MemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
    next_id: AtomicI64,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for MemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        match self.records.entry(alias.to_owned()) {
            Entry::Occupied(_) => Err(StorageError::AliasExists),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                slot.insert(UrlRecord::new(id, alias.to_owned(), url.to_owned()));
                Ok(id)
            }
        }
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        self.records
            .get(alias)
            .map(|record| record.url.clone())
            .ok_or(StorageError::NotFound)
    }

    async fn delete_url(&self, alias: &str) -> Result<String, StorageError> {
        self.records
            .remove(alias)
            .map(|(_, record)| record.url)
            .ok_or(StorageError::NotFound)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
