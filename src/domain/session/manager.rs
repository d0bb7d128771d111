//! SessionManager - the wizard state machine and owner of session state.

use tracing::{debug, info};

use crate::domain::analysis::{ScoreEngine, WeightTally};
use crate::domain::catalog::{DimensionKey, DIMENSION_COUNT};
use crate::domain::foundation::{normalize_identifier, StateMachine, WorkloadRating};
use crate::domain::pairwise::{ComparisonPair, PairwiseScheduler};
use crate::domain::ratings::RatingCollector;
use crate::domain::result::{ResultArtifactBuilder, ResultRecord};
use crate::ports::RandomSource;

use super::{SessionContext, SessionError, SessionMetadata, WizardStage};

/// Outcome of answering one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairwiseProgress {
    /// Another pair is waiting.
    Next(ComparisonPair),
    /// That was the last pair; the result record is ready.
    Completed,
}

/// Drives one respondent through Welcome → Ratings → Pairwise → Results.
///
/// Holds exactly one [`SessionContext`]. Start and restart replace it;
/// every other operation mutates it in place after checking the stage.
pub struct SessionManager {
    stage: WizardStage,
    context: SessionContext,
    rng: Box<dyn RandomSource>,
    builder: ResultArtifactBuilder,
    preserve_task_on_restart: bool,
}

impl SessionManager {
    pub fn new(builder: ResultArtifactBuilder, rng: Box<dyn RandomSource>) -> Self {
        Self {
            stage: WizardStage::Welcome,
            context: SessionContext::new(None, None),
            rng,
            builder,
            preserve_task_on_restart: true,
        }
    }

    /// Whether the task id survives [`restart`](Self::restart).
    pub fn with_preserve_task_on_restart(mut self, preserve: bool) -> Self {
        self.preserve_task_on_restart = preserve;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn metadata(&self) -> &SessionMetadata {
        self.context.metadata()
    }

    pub fn has_consent(&self) -> bool {
        self.context.has_consent()
    }

    pub fn ratings(&self) -> &RatingCollector {
        self.context.ratings()
    }

    pub fn scheduler(&self) -> Option<&PairwiseScheduler> {
        self.context.scheduler()
    }

    /// The pair awaiting an answer, if on the pairwise step.
    pub fn current_pair(&self) -> Option<ComparisonPair> {
        self.context.scheduler().and_then(PairwiseScheduler::current)
    }

    pub fn result(&self) -> Option<&ResultRecord> {
        self.context.result()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Welcome
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets or clears the participant id. Blank input clears it.
    pub fn set_participant_id(&mut self, participant_id: Option<&str>) -> Result<(), SessionError> {
        self.require_stage(WizardStage::Welcome, "change the participant id")?;
        self.context.metadata.participant_id = normalize_identifier(participant_id);
        Ok(())
    }

    /// Sets or clears the task id. Blank input clears it.
    pub fn set_task_id(&mut self, task_id: Option<&str>) -> Result<(), SessionError> {
        self.require_stage(WizardStage::Welcome, "change the task id")?;
        self.context.metadata.task_id = normalize_identifier(task_id);
        Ok(())
    }

    pub fn set_consent(&mut self, consent: bool) -> Result<(), SessionError> {
        self.require_stage(WizardStage::Welcome, "change consent")?;
        self.context.consent = consent;
        Ok(())
    }

    /// Welcome → Ratings. Begins a fresh session with default ratings.
    ///
    /// # Errors
    ///
    /// - `WrongStage` unless on Welcome
    /// - `ConsentRequired` if consent has not been given
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.require_transition(WizardStage::Ratings, "start")?;
        if !self.context.consent {
            return Err(SessionError::ConsentRequired);
        }

        let metadata = &self.context.metadata;
        let mut fresh = SessionContext::new(
            metadata.participant_id.as_deref(),
            metadata.task_id.as_deref(),
        );
        fresh.consent = true;
        self.context = fresh;

        info!(
            session_id = %self.context.metadata.session_id,
            participant_id = ?self.context.metadata.participant_id,
            task_id = ?self.context.metadata.task_id,
            "Session started"
        );
        self.enter(WizardStage::Ratings);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ratings
    // ─────────────────────────────────────────────────────────────────────────

    /// Stores a rating (clamped into 0-100) and returns the stored value.
    pub fn set_rating(&mut self, key: DimensionKey, value: i64) -> Result<WorkloadRating, SessionError> {
        self.require_stage(WizardStage::Ratings, "set a rating")?;
        Ok(self.context.ratings.set_rating(key, value))
    }

    /// Ratings → Welcome. Ratings are kept.
    pub fn back_to_welcome(&mut self) -> Result<(), SessionError> {
        self.require_stage(WizardStage::Ratings, "go back to the welcome step")?;
        self.enter(WizardStage::Welcome);
        Ok(())
    }

    /// Ratings → Pairwise with a freshly shuffled schedule.
    ///
    /// Returns the first pair to present.
    ///
    /// # Errors
    ///
    /// - `WrongStage` unless on Ratings
    /// - `RatingsIncomplete` unless every dimension has been answered
    pub fn to_pairs(&mut self) -> Result<ComparisonPair, SessionError> {
        self.require_transition(WizardStage::Pairwise, "continue to comparisons")?;

        let ratings = &self.context.ratings;
        if !ratings.is_complete() {
            return Err(SessionError::RatingsIncomplete {
                answered: ratings.answered_count(),
                total: DIMENSION_COUNT,
            });
        }

        let scheduler = PairwiseScheduler::shuffled(self.rng.as_mut());
        let first = scheduler.pairs()[0];
        self.context.scheduler = Some(scheduler);
        self.enter(WizardStage::Pairwise);
        Ok(first)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pairwise
    // ─────────────────────────────────────────────────────────────────────────

    /// Answers the current pair. Completing the last pair builds the result
    /// and moves to Results.
    ///
    /// # Errors
    ///
    /// - `WrongStage` unless on Pairwise
    /// - `Pairwise(InvalidChoice)` if `choice` is not in the current pair
    pub fn choose(&mut self, choice: DimensionKey) -> Result<PairwiseProgress, SessionError> {
        let stage = self.stage;
        let scheduler = self
            .context
            .scheduler
            .as_mut()
            .filter(|_| stage == WizardStage::Pairwise)
            .ok_or_else(|| SessionError::wrong_stage("answer a comparison", stage))?;

        scheduler.advance(choice)?;

        match scheduler.current() {
            Some(next) => Ok(PairwiseProgress::Next(next)),
            None => {
                self.complete()?;
                Ok(PairwiseProgress::Completed)
            }
        }
    }

    /// Clears every answer and rewinds to the first pair. Order is kept.
    pub fn reset_comparisons(&mut self) -> Result<(), SessionError> {
        self.require_stage(WizardStage::Pairwise, "reset comparisons")?;
        if let Some(scheduler) = self.context.scheduler.as_mut() {
            scheduler.reset();
        }
        debug!(session_id = %self.context.metadata.session_id, "Comparisons reset");
        Ok(())
    }

    /// Pairwise → Ratings. Ratings are kept; the schedule is discarded.
    pub fn back_to_ratings(&mut self) -> Result<(), SessionError> {
        self.require_transition(WizardStage::Ratings, "go back to ratings")?;
        self.context.scheduler = None;
        self.enter(WizardStage::Ratings);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Restart
    // ─────────────────────────────────────────────────────────────────────────

    /// Any stage → Welcome with a brand-new session.
    ///
    /// The participant id is always cleared; the task id is kept when
    /// configured to.
    pub fn restart(&mut self) {
        let task_id = if self.preserve_task_on_restart {
            self.context.metadata.task_id.clone()
        } else {
            None
        };
        let previous = self.context.metadata.session_id;

        self.context = SessionContext::new(None, task_id.as_deref());

        info!(
            previous_session_id = %previous,
            session_id = %self.context.metadata.session_id,
            "Session restarted"
        );
        self.enter(WizardStage::Welcome);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn complete(&mut self) -> Result<(), SessionError> {
        let context = &mut self.context;
        let scheduler = context
            .scheduler
            .as_ref()
            .ok_or_else(|| SessionError::wrong_stage("finish the comparisons", self.stage))?;

        let weights = WeightTally::from_schedule(scheduler);
        let sheet = context.ratings.sheet();
        let weighted = ScoreEngine::compute_weighted_score(&sheet, &weights)?;
        let raw = ScoreEngine::compute_raw_score(&sheet);

        let record = self.builder.build(
            &context.metadata,
            &sheet,
            &weights,
            &scheduler.comparisons(),
            weighted,
            raw,
        )?;

        info!(
            session_id = %record.session_id(),
            score_weighted = %record.score_weighted(),
            score_raw = %record.score_raw(),
            "Session completed"
        );
        context.result = Some(record);
        self.enter(WizardStage::Results);
        Ok(())
    }

    fn require_stage(&self, expected: WizardStage, operation: &'static str) -> Result<(), SessionError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(SessionError::wrong_stage(operation, self.stage))
        }
    }

    fn require_transition(&self, target: WizardStage, operation: &'static str) -> Result<(), SessionError> {
        self.stage.transition_to(target).map(|_| ()).map_err(|rejection| {
            debug!(code = %rejection.code, reason = %rejection.message, operation, "Transition rejected");
            SessionError::wrong_stage(operation, self.stage)
        })
    }

    fn enter(&mut self, target: WizardStage) {
        debug!(from = %self.stage, to = %target, "Wizard stage changed");
        self.stage = target;
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("stage", &self.stage)
            .field("context", &self.context)
            .field("preserve_task_on_restart", &self.preserve_task_on_restart)
            .finish_non_exhaustive()
    }
}
