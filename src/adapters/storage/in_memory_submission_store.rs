//! In-Memory Submission Store Adapter
//!
//! Keeps collections in memory. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::result::ResultRecord;
use crate::ports::{StorageError, SubmissionStore};

/// In-memory append-only collections
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionStore {
    collections: Arc<RwLock<HashMap<String, Vec<ResultRecord>>>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records under `key`
    pub async fn count(&self, key: &str) -> usize {
        self.collections
            .read()
            .await
            .get(key)
            .map_or(0, Vec::len)
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn append(&self, key: &str, record: &ResultRecord) -> Result<usize, StorageError> {
        let mut collections = self.collections.write().await;
        let entries = collections.entry(key.to_string()).or_default();
        entries.push(record.clone());
        Ok(entries.len())
    }

    async fn load(&self, key: &str) -> Result<Vec<ResultRecord>, StorageError> {
        let collections = self.collections.read().await;
        Ok(collections.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::fixtures::sample_record;

    #[tokio::test]
    async fn append_grows_collection_in_order() {
        let store = InMemorySubmissionStore::new();
        let first = sample_record(Some("P01"), None);
        let second = sample_record(Some("P02"), None);

        assert_eq!(store.append("k", &first).await.unwrap(), 1);
        assert_eq!(store.append("k", &second).await.unwrap(), 2);

        let loaded = store.load("k").await.unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = InMemorySubmissionStore::new();
        store.append("a", &sample_record(None, None)).await.unwrap();

        assert_eq!(store.count("a").await, 1);
        assert_eq!(store.count("b").await, 0);
        assert!(store.load("b").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemorySubmissionStore::new();
        store.append("a", &sample_record(None, None)).await.unwrap();
        store.clear().await;
        assert_eq!(store.count("a").await, 0);
    }
}
