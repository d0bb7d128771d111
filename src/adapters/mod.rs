//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `export` - Result exporters (files, in-memory)
//! - `random` - Random sources for pair ordering
//! - `storage` - Submission stores (files, in-memory)

pub mod export;
pub mod random;
pub mod storage;

pub use export::{ExportedPayload, FileResultExporter, InMemoryResultExporter};
pub use random::SeededRandomSource;
pub use storage::{FileSubmissionStore, InMemorySubmissionStore};
