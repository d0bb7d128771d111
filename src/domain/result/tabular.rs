//! Flat tabular (CSV) view of a result record.

use crate::domain::catalog::DimensionKey;

use super::ResultRecord;

/// Leading metadata / score columns, before the per-dimension columns.
pub const LEADING_COLUMNS: [&str; 9] = [
    "instrument",
    "version",
    "session_id",
    "timestamp_utc",
    "started_at_utc",
    "participant_id",
    "task_id",
    "score_weighted",
    "score_raw",
];

/// Name of the trailing column holding the comparisons as JSON text.
pub const COMPARISONS_COLUMN: &str = "comparisons_json";

/// Header row plus one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularRow {
    pub header: Vec<String>,
    pub values: Vec<String>,
}

impl TabularRow {
    /// Column names in export order.
    pub fn header() -> Vec<String> {
        let mut header: Vec<String> = LEADING_COLUMNS.iter().map(|c| c.to_string()).collect();
        header.extend(DimensionKey::ALL.iter().map(|k| format!("{}_rating", k.code())));
        header.extend(DimensionKey::ALL.iter().map(|k| format!("{}_weight", k.code())));
        header.push(COMPARISONS_COLUMN.to_string());
        header
    }

    /// Flattens a record. Absent identifiers become empty fields.
    pub fn from_record(record: &ResultRecord) -> serde_json::Result<Self> {
        let mut values = vec![
            record.instrument().to_string(),
            record.version().to_string(),
            record.session_id().to_string(),
            record.completed_at().to_string(),
            record.started_at().to_string(),
            record.participant_id().unwrap_or_default().to_string(),
            record.task_id().unwrap_or_default().to_string(),
            record.score_weighted().to_string(),
            record.score_raw().to_string(),
        ];
        values.extend(DimensionKey::ALL.iter().map(|k| {
            record
                .ratings()
                .get(*k)
                .map(|r| r.to_string())
                .unwrap_or_default()
        }));
        values.extend(
            DimensionKey::ALL
                .iter()
                .map(|k| record.weights().get(*k).to_string()),
        );
        values.push(serde_json::to_string(record.comparisons())?);

        Ok(Self {
            header: Self::header(),
            values,
        })
    }

    /// Renders header and data rows, each terminated by `\n`.
    pub fn to_csv(&self) -> String {
        format!("{}\n{}\n", join_csv(&self.header), join_csv(&self.values))
    }
}

/// Quotes a field if it contains a comma, double quote, or newline.
pub fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn join_csv(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_csv(f))
        .collect::<Vec<_>>()
        .join(",")
}
