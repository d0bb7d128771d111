//! Pairwise-schedule error types.

use thiserror::Error;

use crate::domain::catalog::DimensionKey;
use crate::domain::foundation::ErrorCode;

use super::ComparisonPair;

/// Errors raised while advancing through the comparison schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairwiseError {
    /// The answer is not one of the current pair's two dimensions.
    #[error("'{choice}' is not part of the current pair ({pair})")]
    InvalidChoice {
        choice: DimensionKey,
        pair: ComparisonPair,
    },

    /// All pairs have already been answered.
    #[error("All {total} comparisons have already been answered")]
    ScheduleExhausted { total: usize },
}

impl PairwiseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PairwiseError::InvalidChoice { .. } => ErrorCode::InvalidChoice,
            PairwiseError::ScheduleExhausted { .. } => ErrorCode::ScheduleExhausted,
        }
    }

    /// True if the caller may simply retry with another answer.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PairwiseError::InvalidChoice { .. })
    }
}
