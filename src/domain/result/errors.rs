//! Result-artifact error types.

use thiserror::Error;

use crate::domain::catalog::DimensionKey;
use crate::domain::foundation::ErrorCode;

/// Reasons a result record cannot be built.
///
/// Every variant maps to [`ErrorCode::IncompleteRecord`]; no partial
/// record is ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Incomplete record: no rating for {0}")]
    MissingRating(DimensionKey),

    #[error("Incomplete record: weights sum to {actual}, expected {expected}")]
    WeightTotal { actual: u32, expected: u32 },

    #[error("Incomplete record: {actual} comparisons, expected {expected}")]
    ComparisonCount { actual: usize, expected: usize },

    #[error("Incomplete record: comparison #{index} is unanswered")]
    UnresolvedComparison { index: usize },

    #[error("Incomplete record: comparison #{index} answer {chosen} is not one of its pair")]
    ForeignChoice { index: usize, chosen: DimensionKey },

    #[error("Incomplete record: comparison #{index} pits {key} against itself")]
    SelfPair { index: usize, key: DimensionKey },

    #[error("Incomplete record: comparison #{index} repeats an earlier pair")]
    DuplicatePair { index: usize },
}

impl RecordError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::IncompleteRecord
    }
}
