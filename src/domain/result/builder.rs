//! ResultArtifactBuilder - validated assembly of the immutable result record.

use std::collections::HashSet;

use crate::domain::analysis::Weights;
use crate::domain::catalog::DimensionKey;
use crate::domain::foundation::{Score, Timestamp};
use crate::domain::pairwise::{Comparison, ComparisonPair, PAIR_COUNT};
use crate::domain::ratings::RatingSheet;
use crate::domain::session::SessionMetadata;

use super::{ComparisonEntry, InstrumentInfo, RecordError, ResultRecord};

/// Builds [`ResultRecord`]s stamped with the instrument's identity.
#[derive(Debug, Clone)]
pub struct ResultArtifactBuilder {
    instrument: InstrumentInfo,
}

impl ResultArtifactBuilder {
    pub fn new(instrument: InstrumentInfo) -> Self {
        Self { instrument }
    }

    pub fn instrument(&self) -> &InstrumentInfo {
        &self.instrument
    }

    /// Validates the inputs and builds a record completed "now".
    ///
    /// # Errors
    ///
    /// - `MissingRating` if any dimension has no rating
    /// - `WeightTotal` if weights do not sum to 15
    /// - `ComparisonCount` unless exactly 15 comparisons are given
    /// - `UnresolvedComparison` / `ForeignChoice` for a missing or impossible answer
    pub fn build(
        &self,
        session: &SessionMetadata,
        ratings: &RatingSheet,
        weights: &Weights,
        comparisons: &[Comparison],
        score_weighted: Score,
        score_raw: Score,
    ) -> Result<ResultRecord, RecordError> {
        self.build_at(
            session,
            Timestamp::now(),
            ratings,
            weights,
            comparisons,
            score_weighted,
            score_raw,
        )
    }

    /// Same as [`build`](Self::build) with an explicit completion time.
    #[allow(clippy::too_many_arguments)]
    pub fn build_at(
        &self,
        session: &SessionMetadata,
        completed_at: Timestamp,
        ratings: &RatingSheet,
        weights: &Weights,
        comparisons: &[Comparison],
        score_weighted: Score,
        score_raw: Score,
    ) -> Result<ResultRecord, RecordError> {
        check_answers(ratings, weights)?;
        let entries = Self::resolve_comparisons(comparisons)?;

        Ok(ResultRecord::assemble(
            &self.instrument,
            session.session_id,
            completed_at,
            session.started_at,
            session.participant_id.clone(),
            session.task_id.clone(),
            ratings.clone(),
            weights.clone(),
            entries,
            score_weighted,
            score_raw,
        ))
    }

    fn resolve_comparisons(comparisons: &[Comparison]) -> Result<Vec<ComparisonEntry>, RecordError> {
        let entries = comparisons
            .iter()
            .enumerate()
            .map(|(index, comparison)| {
                let chosen: DimensionKey = comparison
                    .chosen
                    .ok_or(RecordError::UnresolvedComparison { index })?;
                Ok(ComparisonEntry {
                    a: comparison.pair.a(),
                    b: comparison.pair.b(),
                    chosen,
                })
            })
            .collect::<Result<Vec<_>, RecordError>>()?;

        check_entries(&entries)?;
        Ok(entries)
    }
}

/// Every dimension rated and weights summing to 15.
pub(super) fn check_answers(ratings: &RatingSheet, weights: &Weights) -> Result<(), RecordError> {
    if let Some(missing) = ratings.missing().first() {
        return Err(RecordError::MissingRating(*missing));
    }

    if !weights.is_complete() {
        return Err(RecordError::WeightTotal {
            actual: weights.total(),
            expected: PAIR_COUNT as u32,
        });
    }
    Ok(())
}

/// Exactly 15 distinct pairs, each answered with one of its own keys.
pub(super) fn check_entries(entries: &[ComparisonEntry]) -> Result<(), RecordError> {
    if entries.len() != PAIR_COUNT {
        return Err(RecordError::ComparisonCount {
            actual: entries.len(),
            expected: PAIR_COUNT,
        });
    }

    let mut seen = HashSet::with_capacity(PAIR_COUNT);
    for (index, entry) in entries.iter().enumerate() {
        let pair = ComparisonPair::new(entry.a, entry.b)
            .map_err(|_| RecordError::SelfPair { index, key: entry.a })?;
        if !seen.insert(pair) {
            return Err(RecordError::DuplicatePair { index });
        }
        if !pair.contains(entry.chosen) {
            return Err(RecordError::ForeignChoice {
                index,
                chosen: entry.chosen,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{ScoreEngine, WeightTally};
    use crate::domain::foundation::{SessionId, WorkloadRating};
    use crate::domain::pairwise::{ComparisonPair, PairwiseScheduler};
    use DimensionKey::*;

    fn builder() -> ResultArtifactBuilder {
        ResultArtifactBuilder::new(InstrumentInfo::new("NASA-TLX (full)", "test-build"))
    }

    fn metadata() -> SessionMetadata {
        SessionMetadata {
            session_id: SessionId::new(),
            started_at: Timestamp::now(),
            participant_id: Some("P01".to_string()),
            task_id: None,
        }
    }

    fn ratings() -> RatingSheet {
        DimensionKey::ALL
            .into_iter()
            .zip([70, 10, 60, 20, 80, 30])
            .map(|(k, v)| (k, WorkloadRating::clamped(v)))
            .collect()
    }

    /// Canonical-order comparisons where the earlier dimension always wins.
    fn answered_comparisons() -> Vec<Comparison> {
        PairwiseScheduler::generate_pairs()
            .into_iter()
            .map(|pair| Comparison {
                pair,
                chosen: Some(pair.a()),
            })
            .collect()
    }

    fn weights_for(comparisons: &[Comparison]) -> Weights {
        let choices: Vec<_> = comparisons.iter().map(|c| c.chosen).collect();
        WeightTally::tally(&choices)
    }

    #[test]
    fn build_produces_record_with_all_fields() {
        let comparisons = answered_comparisons();
        let weights = weights_for(&comparisons);
        let ratings = ratings();
        let weighted = ScoreEngine::compute_weighted_score(&ratings, &weights).unwrap();
        let raw = ScoreEngine::compute_raw_score(&ratings);
        let session = metadata();

        let record = builder()
            .build(&session, &ratings, &weights, &comparisons, weighted, raw)
            .unwrap();

        assert_eq!(record.instrument(), "NASA-TLX (full)");
        assert_eq!(record.version(), "test-build");
        assert_eq!(record.session_id(), &session.session_id);
        assert_eq!(record.participant_id(), Some("P01"));
        assert_eq!(record.task_id(), None);
        assert_eq!(record.comparisons().len(), 15);
        assert_eq!(record.comparisons()[0].chosen, MentalDemand);
        assert_eq!(record.weights().get(MentalDemand), 5);
        assert_eq!(record.score_raw().to_string(), "45.00");
        assert!(!record.completed_at().is_before(record.started_at()));
    }

    #[test]
    fn build_rejects_missing_rating() {
        let comparisons = answered_comparisons();
        let mut partial = RatingSheet::new();
        partial.insert(MentalDemand, WorkloadRating::clamped(10));

        let err = builder()
            .build(
                &metadata(),
                &partial,
                &weights_for(&comparisons),
                &comparisons,
                Score::ZERO,
                Score::ZERO,
            )
            .unwrap_err();
        assert_eq!(err, RecordError::MissingRating(PhysicalDemand));
    }

    #[test]
    fn build_rejects_incomplete_weights() {
        let comparisons = answered_comparisons();
        let err = builder()
            .build(
                &metadata(),
                &ratings(),
                &Weights::zero(),
                &comparisons,
                Score::ZERO,
                Score::ZERO,
            )
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::WeightTotal {
                actual: 0,
                expected: 15
            }
        );
    }

    #[test]
    fn build_rejects_short_comparison_list() {
        let comparisons = answered_comparisons();
        let weights = weights_for(&comparisons);
        let err = builder()
            .build(
                &metadata(),
                &ratings(),
                &weights,
                &comparisons[..14],
                Score::ZERO,
                Score::ZERO,
            )
            .unwrap_err();
        assert!(matches!(err, RecordError::ComparisonCount { actual: 14, .. }));
    }

    #[test]
    fn build_rejects_unanswered_comparison() {
        let mut comparisons = answered_comparisons();
        let weights = weights_for(&comparisons);
        comparisons[6].chosen = None;

        let err = builder()
            .build(&metadata(), &ratings(), &weights, &comparisons, Score::ZERO, Score::ZERO)
            .unwrap_err();
        assert_eq!(err, RecordError::UnresolvedComparison { index: 6 });
    }

    #[test]
    fn build_rejects_choice_outside_pair() {
        let mut comparisons = answered_comparisons();
        let weights = weights_for(&comparisons);
        comparisons[0] = Comparison {
            pair: ComparisonPair::new(MentalDemand, PhysicalDemand).unwrap(),
            chosen: Some(Frustration),
        };

        let err = builder()
            .build(&metadata(), &ratings(), &weights, &comparisons, Score::ZERO, Score::ZERO)
            .unwrap_err();
        assert!(matches!(err, RecordError::ForeignChoice { index: 0, .. }));
    }

    #[test]
    fn build_rejects_repeated_pair() {
        let mut comparisons = answered_comparisons();
        let weights = weights_for(&comparisons);
        comparisons[14] = comparisons[0];

        let err = builder()
            .build(&metadata(), &ratings(), &weights, &comparisons, Score::ZERO, Score::ZERO)
            .unwrap_err();
        assert_eq!(err, RecordError::DuplicatePair { index: 14 });
    }
}
