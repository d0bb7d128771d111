//! Result module - the immutable export record and its two views.
//!
//! - Structured view: [`ResultRecord::to_json_pretty`]
//! - Flat tabular view: [`TabularRow`] (header row + one data row, CSV-escaped)

mod builder;
mod errors;
#[cfg(test)]
pub(crate) mod fixtures;
mod naming;
mod record;
mod tabular;

pub use builder::ResultArtifactBuilder;
pub use errors::RecordError;
pub use naming::{export_file_name, sanitize_component};
pub use record::{ComparisonEntry, InstrumentInfo, ResultRecord};
pub use tabular::{escape_csv, TabularRow, COMPARISONS_COLUMN, LEADING_COLUMNS};
