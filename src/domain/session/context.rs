//! Per-session state, replaced wholesale on start and restart.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{normalize_identifier, SessionId, Timestamp};
use crate::domain::pairwise::PairwiseScheduler;
use crate::domain::ratings::RatingCollector;
use crate::domain::result::ResultRecord;

/// Identity and timing of one assessment session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub session_id: SessionId,
    pub started_at: Timestamp,
    pub participant_id: Option<String>,
    pub task_id: Option<String>,
}

impl SessionMetadata {
    /// Fresh id and start time; blank identifiers are stored as absent.
    pub fn begin(participant_id: Option<&str>, task_id: Option<&str>) -> Self {
        Self {
            session_id: SessionId::new(),
            started_at: Timestamp::now(),
            participant_id: normalize_identifier(participant_id),
            task_id: normalize_identifier(task_id),
        }
    }
}

/// Everything owned by the session in flight.
///
/// The scheduler only exists while the respondent is on (or past) the
/// pairwise step; the result only once the schedule is complete.
#[derive(Debug)]
pub struct SessionContext {
    pub(super) metadata: SessionMetadata,
    pub(super) consent: bool,
    pub(super) ratings: RatingCollector,
    pub(super) scheduler: Option<PairwiseScheduler>,
    pub(super) result: Option<ResultRecord>,
}

impl SessionContext {
    pub fn new(participant_id: Option<&str>, task_id: Option<&str>) -> Self {
        Self {
            metadata: SessionMetadata::begin(participant_id, task_id),
            consent: false,
            ratings: RatingCollector::new(),
            scheduler: None,
            result: None,
        }
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    pub fn has_consent(&self) -> bool {
        self.consent
    }

    pub fn ratings(&self) -> &RatingCollector {
        &self.ratings
    }

    pub fn scheduler(&self) -> Option<&PairwiseScheduler> {
        self.scheduler.as_ref()
    }

    pub fn result(&self) -> Option<&ResultRecord> {
        self.result.as_ref()
    }
}
