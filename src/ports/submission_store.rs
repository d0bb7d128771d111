//! Submission Store Port - Optional local history of completed records.
//!
//! Persistence is best effort. Callers log failures and carry on; nothing
//! in the assessment flow depends on a write succeeding.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::result::ResultRecord;

/// Collection key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "nasa_tlx_submissions_v1";

/// Errors from submission storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Stored collection '{key}' is unreadable: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Failed to serialize submissions: {0}")]
    Serialization(String),

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageError
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Append-only collections of result records, addressed by key.
///
/// # Contract
///
/// - `append` adds to the end; earlier entries are never rewritten
/// - `load` of an unknown key is an empty list, not an error
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Appends `record` and returns the collection's new length.
    async fn append(&self, key: &str, record: &ResultRecord) -> Result<usize, StorageError>;

    /// Returns every record stored under `key`, oldest first.
    async fn load(&self, key: &str) -> Result<Vec<ResultRecord>, StorageError>;
}
