//! Session-specific error types.

use thiserror::Error;

use crate::domain::analysis::ScoreError;
use crate::domain::foundation::ErrorCode;
use crate::domain::pairwise::PairwiseError;
use crate::domain::result::RecordError;

use super::WizardStage;

/// Errors raised by [`SessionManager`](super::SessionManager) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Operation is not available in the current stage.
    #[error("Cannot {operation} while on the {stage} step")]
    WrongStage {
        operation: &'static str,
        stage: WizardStage,
    },

    /// Start was requested without consent.
    #[error("Consent is required before starting")]
    ConsentRequired,

    /// Tried to leave the ratings step with unanswered dimensions.
    #[error("Rate all dimensions before continuing ({answered}/{total} answered)")]
    RatingsIncomplete { answered: usize, total: usize },

    #[error(transparent)]
    Pairwise(#[from] PairwiseError),

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl SessionError {
    pub fn wrong_stage(operation: &'static str, stage: WizardStage) -> Self {
        SessionError::WrongStage { operation, stage }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::WrongStage { .. } => ErrorCode::InvalidStateTransition,
            SessionError::ConsentRequired => ErrorCode::ConsentRequired,
            SessionError::RatingsIncomplete { .. } => ErrorCode::RatingsIncomplete,
            SessionError::Pairwise(err) => err.code(),
            SessionError::Score(err) => err.code(),
            SessionError::Record(err) => err.code(),
        }
    }

    /// True when the respondent can fix the problem and try again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::ConsentRequired | SessionError::RatingsIncomplete { .. } => true,
            SessionError::Pairwise(err) => err.is_retryable(),
            _ => false,
        }
    }
}
