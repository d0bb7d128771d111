//! Score Engine - Weighted and raw workload score computation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::{DimensionKey, DIMENSION_COUNT};
use crate::domain::foundation::{ErrorCode, Score, WorkloadRating};
use crate::domain::pairwise::PAIR_COUNT;
use crate::domain::ratings::RatingSheet;

use super::Weights;

/// Errors raised by score computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Weighted scoring needs all 15 comparisons resolved.
    #[error("Weighted score needs {required} resolved comparisons, got {resolved}")]
    IncompleteSchedule { resolved: u32, required: u32 },
}

impl ScoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScoreError::IncompleteSchedule { .. } => ErrorCode::IncompleteSchedule,
        }
    }
}

/// One row of the per-dimension breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionContribution {
    pub key: DimensionKey,
    pub rating: WorkloadRating,
    pub weight: u8,
    /// `round2(rating * weight / 15)`
    pub contribution: Score,
}

/// Workload score functions. Pure and stateless.
pub struct ScoreEngine;

impl ScoreEngine {
    /// Computes the weighted workload score.
    ///
    /// # Algorithm
    /// weighted = round2( Σ rating[d] · weight[d] / 15 )
    ///
    /// # Errors
    /// - `IncompleteSchedule` if the weights do not sum to exactly 15
    ///
    /// # Edge Cases
    /// - Missing ratings: Treated as 0 (a sheet from `RatingCollector` is always complete)
    pub fn compute_weighted_score(
        ratings: &RatingSheet,
        weights: &Weights,
    ) -> Result<Score, ScoreError> {
        if !weights.is_complete() {
            return Err(ScoreError::IncompleteSchedule {
                resolved: weights.total(),
                required: PAIR_COUNT as u32,
            });
        }

        let weighted_sum: u64 = weights
            .iter()
            .map(|(key, weight)| Self::rating_of(ratings, key) * u64::from(weight))
            .sum();

        Ok(Score::from_ratio(weighted_sum, PAIR_COUNT as u64))
    }

    /// Computes the raw (unweighted) workload score.
    ///
    /// # Algorithm
    /// raw = round2( Σ rating[d] / 6 )
    pub fn compute_raw_score(ratings: &RatingSheet) -> Score {
        Score::from_ratio(ratings.total(), DIMENSION_COUNT as u64)
    }

    /// Per-dimension contributions to the weighted score, in catalog order.
    ///
    /// Individual contributions are rounded on their own, so their sum can
    /// differ from the weighted score by a few hundredths.
    pub fn contributions(ratings: &RatingSheet, weights: &Weights) -> Vec<DimensionContribution> {
        DimensionKey::ALL
            .into_iter()
            .map(|key| {
                let rating = ratings.get(key).unwrap_or(WorkloadRating::MIN);
                let weight = weights.get(key);
                DimensionContribution {
                    key,
                    rating,
                    weight,
                    contribution: Score::from_ratio(
                        u64::from(rating.value()) * u64::from(weight),
                        PAIR_COUNT as u64,
                    ),
                }
            })
            .collect()
    }

    fn rating_of(ratings: &RatingSheet, key: DimensionKey) -> u64 {
        ratings.get(key).map(|r| u64::from(r.value())).unwrap_or(0)
    }
}
