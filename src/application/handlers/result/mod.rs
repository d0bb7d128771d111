//! Result handlers - what happens to a record once a session completes.

mod export_result;
mod record_submission;

pub use export_result::{ExportResultCommand, ExportResultHandler, ExportResultResult};
pub use record_submission::{
    RecordSubmissionCommand, RecordSubmissionHandler, RecordSubmissionOutcome,
};
