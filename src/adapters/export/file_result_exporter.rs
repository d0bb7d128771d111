//! File-based Result Exporter
//!
//! One file per record and format, named after the task, participant and
//! session so repeated exports never collide across sessions.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::result::{export_file_name, ResultRecord};
use crate::ports::{ExportError, ExportFormat, ExportReceipt, ResultExporter};

/// Writes exports into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileResultExporter {
    output_dir: PathBuf,
}

impl FileResultExporter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path an export of `record` in `format` is written to.
    pub fn file_path(&self, record: &ResultRecord, format: ExportFormat) -> PathBuf {
        self.output_dir
            .join(export_file_name(record, format.extension()))
    }
}

#[async_trait]
impl ResultExporter for FileResultExporter {
    async fn export(
        &self,
        record: &ResultRecord,
        format: ExportFormat,
    ) -> Result<ExportReceipt, ExportError> {
        let payload = format.render(record)?;

        fs::create_dir_all(&self.output_dir).await?;

        let path = self.file_path(record, format);
        fs::write(&path, payload.as_bytes()).await?;

        debug!(path = %path.display(), format = %format, "Result exported");

        Ok(ExportReceipt {
            format,
            file_name: export_file_name(record, format.extension()),
            location: Some(path),
            bytes: payload.len(),
        })
    }
}
