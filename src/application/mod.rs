//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates ports around the domain: once the session
//! manager has produced a result record, handlers export and persist it.

pub mod handlers;

pub use handlers::{
    ExportResultCommand, ExportResultHandler, ExportResultResult, RecordSubmissionCommand,
    RecordSubmissionHandler, RecordSubmissionOutcome,
};
