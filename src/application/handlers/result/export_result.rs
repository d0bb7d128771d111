//! ExportResultHandler - Command handler for exporting a finished record.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::result::ResultRecord;
use crate::ports::{ExportError, ExportFormat, ExportReceipt, ResultExporter};

/// Command to export one record in one or more formats.
#[derive(Debug, Clone)]
pub struct ExportResultCommand {
    pub record: ResultRecord,
    pub formats: Vec<ExportFormat>,
}

impl ExportResultCommand {
    /// Exports both the structured and the tabular view.
    pub fn all_formats(record: ResultRecord) -> Self {
        Self {
            record,
            formats: ExportFormat::ALL.to_vec(),
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportResultResult {
    pub receipts: Vec<ExportReceipt>,
}

/// Handler for exporting records.
pub struct ExportResultHandler {
    exporter: Arc<dyn ResultExporter>,
}

impl ExportResultHandler {
    pub fn new(exporter: Arc<dyn ResultExporter>) -> Self {
        Self { exporter }
    }

    /// Exports each requested format in order, stopping at the first failure.
    ///
    /// The record is never touched, so a failed export can be retried as is.
    pub async fn handle(&self, cmd: ExportResultCommand) -> Result<ExportResultResult, ExportError> {
        let mut receipts = Vec::with_capacity(cmd.formats.len());

        for format in cmd.formats {
            match self.exporter.export(&cmd.record, format).await {
                Ok(receipt) => {
                    info!(
                        session_id = %cmd.record.session_id(),
                        file_name = %receipt.file_name,
                        bytes = receipt.bytes,
                        "Result exported"
                    );
                    receipts.push(receipt);
                }
                Err(err) => {
                    warn!(
                        session_id = %cmd.record.session_id(),
                        format = %format,
                        error = %err,
                        "Result export failed"
                    );
                    return Err(err);
                }
            }
        }

        Ok(ExportResultResult { receipts })
    }
}
