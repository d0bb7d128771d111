//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RandomSource` - Injected randomness for the pairwise schedule
//! - `ResultExporter` - Delivers the structured or tabular view of a record
//! - `SubmissionStore` - Optional append-only local history

mod random_source;
mod result_exporter;
mod submission_store;

pub use random_source::RandomSource;
pub use result_exporter::{ExportError, ExportFormat, ExportReceipt, ResultExporter};
pub use submission_store::{StorageError, SubmissionStore, DEFAULT_STORAGE_KEY};
