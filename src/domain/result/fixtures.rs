//! Shared record fixtures for unit tests.

use crate::domain::analysis::{ScoreEngine, WeightTally};
use crate::domain::catalog::DimensionKey;
use crate::domain::foundation::WorkloadRating;
use crate::domain::pairwise::{Comparison, PairwiseScheduler};
use crate::domain::ratings::RatingSheet;
use crate::domain::session::SessionMetadata;

use super::{InstrumentInfo, ResultArtifactBuilder, ResultRecord};

/// Preference order yielding weights MD:5 EF:4 TD:3 FR:2 PD:1 OP:0.
const PREFERENCE: [DimensionKey; 6] = [
    DimensionKey::MentalDemand,
    DimensionKey::Effort,
    DimensionKey::TemporalDemand,
    DimensionKey::Frustration,
    DimensionKey::PhysicalDemand,
    DimensionKey::Performance,
];

fn rank(key: DimensionKey) -> usize {
    PREFERENCE.iter().position(|k| *k == key).unwrap_or(PREFERENCE.len())
}

/// Ratings MD:70 PD:10 TD:60 OP:20 EF:80 FR:30 (weighted 61.33, raw 45.00).
pub(crate) fn sample_record(participant_id: Option<&str>, task_id: Option<&str>) -> ResultRecord {
    let ratings: RatingSheet = DimensionKey::ALL
        .into_iter()
        .zip([70, 10, 60, 20, 80, 30])
        .map(|(k, v)| (k, WorkloadRating::clamped(v)))
        .collect();

    let comparisons: Vec<Comparison> = PairwiseScheduler::generate_pairs()
        .into_iter()
        .map(|pair| {
            let winner = if rank(pair.a()) < rank(pair.b()) {
                pair.a()
            } else {
                pair.b()
            };
            Comparison {
                pair,
                chosen: Some(winner),
            }
        })
        .collect();

    let choices: Vec<_> = comparisons.iter().map(|c| c.chosen).collect();
    let weights = WeightTally::tally(&choices);
    let weighted = ScoreEngine::compute_weighted_score(&ratings, &weights).unwrap();
    let raw = ScoreEngine::compute_raw_score(&ratings);

    ResultArtifactBuilder::new(InstrumentInfo::new("NASA-TLX (full)", "test-build"))
        .build(
            &SessionMetadata::begin(participant_id, task_id),
            &ratings,
            &weights,
            &comparisons,
            weighted,
            raw,
        )
        .unwrap()
}
