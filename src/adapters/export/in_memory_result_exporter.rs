//! In-Memory Result Exporter
//!
//! Keeps every rendered payload. Useful for testing and as the in-process
//! equivalent of copying a result to the clipboard.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::result::{export_file_name, ResultRecord};
use crate::ports::{ExportError, ExportFormat, ExportReceipt, ResultExporter};

/// One rendered export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPayload {
    pub format: ExportFormat,
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryResultExporter {
    payloads: Arc<RwLock<Vec<ExportedPayload>>>,
}

impl InMemoryResultExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All payloads in export order.
    pub async fn payloads(&self) -> Vec<ExportedPayload> {
        self.payloads.read().await.clone()
    }

    /// Most recent payload, e.g. what would currently be on the clipboard.
    pub async fn last(&self) -> Option<ExportedPayload> {
        self.payloads.read().await.last().cloned()
    }

    pub async fn clear(&self) {
        self.payloads.write().await.clear();
    }
}

#[async_trait]
impl ResultExporter for InMemoryResultExporter {
    async fn export(
        &self,
        record: &ResultRecord,
        format: ExportFormat,
    ) -> Result<ExportReceipt, ExportError> {
        let content = format.render(record)?;
        let file_name = export_file_name(record, format.extension());
        let bytes = content.len();

        self.payloads.write().await.push(ExportedPayload {
            format,
            file_name: file_name.clone(),
            content,
        });

        Ok(ExportReceipt {
            format,
            file_name,
            location: None,
            bytes,
        })
    }
}
