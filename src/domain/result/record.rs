//! ResultRecord - the immutable, exportable outcome of one session.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::Weights;
use crate::domain::catalog::DimensionKey;
use crate::domain::foundation::{Score, SessionId, Timestamp};
use crate::domain::ratings::RatingSheet;

use super::builder::{check_answers, check_entries};
use super::RecordError;

/// Identification of the instrument that produced a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentInfo {
    /// Constant instrument name (e.g. "NASA-TLX (full)").
    pub name: String,
    /// Build / version tag.
    pub version: String,
}

impl InstrumentInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// One answered comparison as it appears in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub a: DimensionKey,
    pub b: DimensionKey,
    pub chosen: DimensionKey,
}

/// Completed assessment - the structured export record.
///
/// # Invariants
///
/// - `ratings_0_100` covers all six dimensions
/// - `weights_0_5` sums to 15
/// - `comparisons` holds 15 entries, each answered with one of its own keys
///
/// Built only by [`ResultArtifactBuilder`](super::ResultArtifactBuilder) and
/// never mutated afterwards. Field names are the export schema. Parsing runs
/// the same checks as building and fails with a [`RecordError`] message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct ResultRecord {
    instrument: String,
    version: String,
    session_id: SessionId,
    timestamp_utc: Timestamp,
    started_at_utc: Timestamp,
    participant_id: Option<String>,
    task_id: Option<String>,
    ratings_0_100: RatingSheet,
    weights_0_5: Weights,
    comparisons: Vec<ComparisonEntry>,
    score_weighted: Score,
    score_raw: Score,
}

/// Unchecked wire shape of a [`ResultRecord`].
#[derive(Deserialize)]
struct RecordFields {
    instrument: String,
    version: String,
    session_id: SessionId,
    timestamp_utc: Timestamp,
    started_at_utc: Timestamp,
    participant_id: Option<String>,
    task_id: Option<String>,
    ratings_0_100: RatingSheet,
    weights_0_5: Weights,
    comparisons: Vec<ComparisonEntry>,
    score_weighted: Score,
    score_raw: Score,
}

impl TryFrom<RecordFields> for ResultRecord {
    type Error = RecordError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        check_answers(&fields.ratings_0_100, &fields.weights_0_5)?;
        check_entries(&fields.comparisons)?;

        Ok(Self {
            instrument: fields.instrument,
            version: fields.version,
            session_id: fields.session_id,
            timestamp_utc: fields.timestamp_utc,
            started_at_utc: fields.started_at_utc,
            participant_id: fields.participant_id,
            task_id: fields.task_id,
            ratings_0_100: fields.ratings_0_100,
            weights_0_5: fields.weights_0_5,
            comparisons: fields.comparisons,
            score_weighted: fields.score_weighted,
            score_raw: fields.score_raw,
        })
    }
}

impl ResultRecord {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn assemble(
        instrument: &InstrumentInfo,
        session_id: SessionId,
        completed_at: Timestamp,
        started_at: Timestamp,
        participant_id: Option<String>,
        task_id: Option<String>,
        ratings: RatingSheet,
        weights: Weights,
        comparisons: Vec<ComparisonEntry>,
        score_weighted: Score,
        score_raw: Score,
    ) -> Self {
        Self {
            instrument: instrument.name.clone(),
            version: instrument.version.clone(),
            session_id,
            timestamp_utc: completed_at,
            started_at_utc: started_at,
            participant_id,
            task_id,
            ratings_0_100: ratings,
            weights_0_5: weights,
            comparisons,
            score_weighted,
            score_raw,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// When the record was built (session completion).
    pub fn completed_at(&self) -> &Timestamp {
        &self.timestamp_utc
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at_utc
    }

    pub fn participant_id(&self) -> Option<&str> {
        self.participant_id.as_deref()
    }

    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    pub fn ratings(&self) -> &RatingSheet {
        &self.ratings_0_100
    }

    pub fn weights(&self) -> &Weights {
        &self.weights_0_5
    }

    pub fn comparisons(&self) -> &[ComparisonEntry] {
        &self.comparisons
    }

    pub fn score_weighted(&self) -> Score {
        self.score_weighted
    }

    pub fn score_raw(&self) -> Score {
        self.score_raw
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structured view
    // ─────────────────────────────────────────────────────────────────────────

    /// Pretty-printed JSON (the structured export).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a structured export back into a record.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::sample_record;
    use super::*;

    #[test]
    fn sample_record_matches_reference_scores() {
        let record = sample_record(Some("P01"), None);
        assert_eq!(record.score_weighted().to_string(), "61.33");
        assert_eq!(record.score_raw().to_string(), "45.00");
        assert_eq!(record.weights().get(DimensionKey::TemporalDemand), 3);
    }

    #[test]
    fn json_round_trip_reproduces_record() {
        let record = sample_record(Some("P01"), Some("T1"));
        let json = record.to_json_pretty().unwrap();
        let parsed = ResultRecord::from_json(&json).unwrap();

        assert_eq!(parsed.ratings(), record.ratings());
        assert_eq!(parsed.weights(), record.weights());
        assert_eq!(parsed.comparisons(), record.comparisons());
        assert_eq!(parsed, record);
    }

    #[test]
    fn json_uses_export_field_names() {
        let record = sample_record(None, None);
        let value: serde_json::Value = serde_json::from_str(&record.to_json_pretty().unwrap()).unwrap();

        for field in [
            "instrument",
            "version",
            "session_id",
            "timestamp_utc",
            "started_at_utc",
            "participant_id",
            "task_id",
            "ratings_0_100",
            "weights_0_5",
            "comparisons",
            "score_weighted",
            "score_raw",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert!(value["participant_id"].is_null());
        assert_eq!(value["ratings_0_100"]["EF"], 80);
        assert_eq!(value["weights_0_5"]["MD"], 5);
        assert_eq!(value["score_weighted"], 61.33);
        assert_eq!(value["comparisons"].as_array().unwrap().len(), 15);
        assert_eq!(value["comparisons"][0]["a"], "MD");
    }

    fn sample_json() -> serde_json::Value {
        serde_json::to_value(sample_record(Some("P01"), None)).unwrap()
    }

    fn parse(value: serde_json::Value) -> serde_json::Result<ResultRecord> {
        ResultRecord::from_json(&value.to_string())
    }

    #[test]
    fn from_json_rejects_truncated_record() {
        let mut value = sample_json();
        value["ratings_0_100"] = serde_json::json!({ "MD": 70 });
        value["weights_0_5"] = serde_json::json!({ "MD": 1, "PD": 0, "TD": 0, "OP": 0, "EF": 0, "FR": 0 });
        value["comparisons"] = serde_json::json!([{ "a": "MD", "b": "PD", "chosen": "MD" }]);

        let err = parse(value).unwrap_err();
        assert!(err.to_string().contains("no rating for PD"), "{err}");
    }

    #[test]
    fn from_json_rejects_short_weights() {
        let mut value = sample_json();
        value["weights_0_5"]["MD"] = serde_json::json!(4);

        let err = parse(value).unwrap_err();
        assert!(err.to_string().contains("weights sum to 14"), "{err}");
    }

    #[test]
    fn from_json_rejects_missing_comparisons() {
        let mut value = sample_json();
        value["comparisons"].as_array_mut().unwrap().pop();

        let err = parse(value).unwrap_err();
        assert!(err.to_string().contains("14 comparisons"), "{err}");
    }

    #[test]
    fn from_json_rejects_foreign_choice() {
        let mut value = sample_json();
        // Pair #3 is MD vs EF.
        value["comparisons"][3]["chosen"] = serde_json::json!("FR");

        let err = parse(value).unwrap_err();
        assert!(err.to_string().contains("comparison #3 answer FR"), "{err}");
    }

    #[test]
    fn from_json_rejects_repeated_pair() {
        let mut value = sample_json();
        let first = value["comparisons"][0].clone();
        value["comparisons"][1] = first;

        let err = parse(value).unwrap_err();
        assert!(err.to_string().contains("comparison #1 repeats"), "{err}");
    }

    #[test]
    fn json_and_csv_show_the_same_timestamps() {
        let mut value = sample_json();
        value["timestamp_utc"] = serde_json::json!("2026-10-18T10:30:00.123456789Z");
        let record = parse(value).unwrap();

        let json: serde_json::Value = serde_json::from_str(&record.to_json_pretty().unwrap()).unwrap();
        let row = super::super::TabularRow::from_record(&record).unwrap();

        assert_eq!(json["timestamp_utc"], "2026-10-18T10:30:00.123Z");
        assert_eq!(json["timestamp_utc"], row.values[3].as_str());
        assert_eq!(json["started_at_utc"], row.values[4].as_str());
    }
}
