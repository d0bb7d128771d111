//! Application handlers.
//!
//! Command handlers that run after a session completes.

pub mod result;

pub use result::{
    ExportResultCommand, ExportResultHandler, ExportResultResult, RecordSubmissionCommand,
    RecordSubmissionHandler, RecordSubmissionOutcome,
};
