//! Result Exporter Port - Delivering a finished record to the respondent.
//!
//! The record itself is immutable; exporters only render one of its two
//! views and hand the payload somewhere (a file, a buffer, a clipboard).

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::result::{ResultRecord, TabularRow};

/// Export encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Structured (hierarchical) view.
    Json,
    /// Flat tabular view: header row plus one data row.
    Csv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Json, ExportFormat::Csv];

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Renders `record` in this format.
    pub fn render(&self, record: &ResultRecord) -> Result<String, ExportError> {
        let rendered = match self {
            ExportFormat::Json => record.to_json_pretty(),
            ExportFormat::Csv => TabularRow::from_record(record).map(|row| row.to_csv()),
        };
        rendered.map_err(|e| ExportError::Serialization(e.to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ValidationError::invalid_format(
                "export_format",
                format!("unknown format '{}', expected json or csv", other),
            )),
        }
    }
}

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub format: ExportFormat,
    pub file_name: String,
    /// Filesystem location, when the exporter writes files.
    pub location: Option<PathBuf>,
    pub bytes: usize,
}

/// Export failures. Reported to the respondent; the record is untouched
/// so the export can simply be retried.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize result: {0}")]
    Serialization(String),

    #[error("Failed to write export: {0}")]
    Io(String),
}

impl ExportError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::SerializationError
    }

    pub fn is_retryable(&self) -> bool {
        true
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

/// Port for exporting a completed result record.
///
/// # Contract
///
/// Implementations must:
/// - Never modify the record
/// - Produce the same payload for the same record and format
/// - Name outputs with [`export_file_name`](crate::domain::result::export_file_name)
#[async_trait]
pub trait ResultExporter: Send + Sync {
    /// Renders and delivers one view of `record`.
    async fn export(
        &self,
        record: &ResultRecord,
        format: ExportFormat,
    ) -> Result<ExportReceipt, ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" csv ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn export_errors_are_retryable_serialization_errors() {
        let err = ExportError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert_eq!(err.code(), ErrorCode::SerializationError);
        assert!(err.is_retryable());
        assert!(err.to_string().contains("read-only"));
    }
}
