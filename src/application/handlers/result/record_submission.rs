//! RecordSubmissionHandler - Best-effort local history of completed records.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::result::ResultRecord;
use crate::ports::SubmissionStore;

/// Command to append a completed record to the local history.
#[derive(Debug, Clone)]
pub struct RecordSubmissionCommand {
    pub record: ResultRecord,
}

/// What happened to the submission. Never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSubmissionOutcome {
    /// Appended; the collection now holds `count` records.
    Stored { count: usize },
    /// Persistence is turned off.
    Disabled,
    /// The store failed; the failure was logged and swallowed.
    Failed,
}

/// Handler for persisting submissions.
pub struct RecordSubmissionHandler {
    store: Arc<dyn SubmissionStore>,
    storage_key: String,
    enabled: bool,
}

impl RecordSubmissionHandler {
    pub fn new(store: Arc<dyn SubmissionStore>, storage_key: impl Into<String>, enabled: bool) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            enabled,
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn handle(&self, cmd: RecordSubmissionCommand) -> RecordSubmissionOutcome {
        if !self.enabled {
            return RecordSubmissionOutcome::Disabled;
        }

        match self.store.append(&self.storage_key, &cmd.record).await {
            Ok(count) => {
                debug!(
                    session_id = %cmd.record.session_id(),
                    storage_key = %self.storage_key,
                    count,
                    "Submission stored"
                );
                RecordSubmissionOutcome::Stored { count }
            }
            Err(err) => {
                warn!(
                    session_id = %cmd.record.session_id(),
                    storage_key = %self.storage_key,
                    code = %err.code(),
                    error = %err,
                    "Failed to store submission"
                );
                RecordSubmissionOutcome::Failed
            }
        }
    }
}
