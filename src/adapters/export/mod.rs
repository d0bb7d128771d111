//! Result Exporter Adapters
//!
//! ## Available Adapters
//!
//! - **FileResultExporter** - Writes each export into an output directory
//! - **InMemoryResultExporter** - Keeps rendered payloads in memory
//!   (testing, and a stand-in for copy-to-clipboard)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::export::{FileResultExporter, InMemoryResultExporter};
//!
//! let exporter = FileResultExporter::new("./exports");
//! let receipt = exporter.export(&record, ExportFormat::Csv).await?;
//! ```

mod file_result_exporter;
mod in_memory_result_exporter;

pub use file_result_exporter::FileResultExporter;
pub use in_memory_result_exporter::{ExportedPayload, InMemoryResultExporter};
