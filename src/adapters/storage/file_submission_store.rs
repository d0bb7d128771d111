//! File-based Submission Store Adapter
//!
//! Each collection key maps to `{base_path}/{key}.json`, a JSON array of
//! result records. Appends rewrite the file through a temp file + rename
//! so a crash never leaves a half-written array behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::domain::result::{sanitize_component, ResultRecord};
use crate::ports::{StorageError, SubmissionStore};

/// File-based append-only collections
#[derive(Debug)]
pub struct FileSubmissionStore {
    base_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSubmissionStore {
    /// Create a store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSubmissionStore::new("./data/submissions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// File backing a collection
    ///
    /// # Errors
    /// `InvalidKey` unless `key` is non-empty and made only of `[A-Za-z0-9_-]`
    pub fn collection_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || sanitize_component(key) != key {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }

    async fn read_collection(&self, key: &str, path: &Path) -> Result<Vec<ResultRecord>, StorageError> {
        if !fs::try_exists(path).await? {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(path).await?;
        serde_json::from_str(&json).map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl SubmissionStore for FileSubmissionStore {
    async fn append(&self, key: &str, record: &ResultRecord) -> Result<usize, StorageError> {
        let path = self.collection_path(key)?;
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_collection(key, &path).await?;
        entries.push(record.clone());

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::create_dir_all(&self.base_path).await?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).await?;
        fs::rename(&temp_path, &path).await?;

        Ok(entries.len())
    }

    async fn load(&self, key: &str) -> Result<Vec<ResultRecord>, StorageError> {
        let path = self.collection_path(key)?;
        self.read_collection(key, &path).await
    }
}
