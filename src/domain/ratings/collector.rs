//! RatingCollector - per-dimension ratings with "answered" tracking.

use tracing::debug;

use crate::domain::catalog::{DimensionKey, DIMENSION_COUNT};
use crate::domain::foundation::{ValidationError, WorkloadRating};

use super::RatingSheet;

/// Holds one rating per dimension and whether the respondent has set it.
///
/// # Invariants
///
/// - Every dimension always has a rating in [0, 100] (default 50)
/// - A dimension is answered only after an explicit [`set_rating`](Self::set_rating)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingCollector {
    ratings: [WorkloadRating; DIMENSION_COUNT],
    answered: [bool; DIMENSION_COUNT],
}

impl RatingCollector {
    /// Creates a collector with every dimension at the default and unanswered.
    pub fn new() -> Self {
        Self {
            ratings: [WorkloadRating::DEFAULT; DIMENSION_COUNT],
            answered: [false; DIMENSION_COUNT],
        }
    }

    /// Stores a rating, clamping it into [0, 100], and marks it answered.
    ///
    /// Always succeeds; re-setting a dimension overwrites the previous value.
    pub fn set_rating(&mut self, key: DimensionKey, value: i64) -> WorkloadRating {
        let rating = WorkloadRating::clamped(value);
        if i64::from(rating.value()) != value {
            let correction = ValidationError::out_of_range(key.code(), 0, 100, value);
            debug!(dimension = %key, clamped_to = rating.value(), "{}", correction);
        }

        let idx = key.order_index();
        self.ratings[idx] = rating;
        self.answered[idx] = true;
        rating
    }

    /// Returns the current rating for a dimension.
    pub fn rating(&self, key: DimensionKey) -> WorkloadRating {
        self.ratings[key.order_index()]
    }

    /// Returns true if the respondent has set this dimension.
    pub fn is_answered(&self, key: DimensionKey) -> bool {
        self.answered[key.order_index()]
    }

    /// Number of answered dimensions.
    pub fn answered_count(&self) -> usize {
        self.answered.iter().filter(|a| **a).count()
    }

    /// Fraction of dimensions answered (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        self.answered_count() as f64 / DIMENSION_COUNT as f64
    }

    /// Returns true once every dimension is answered.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == DIMENSION_COUNT
    }

    /// Unanswered dimensions in catalog order.
    pub fn unanswered(&self) -> Vec<DimensionKey> {
        DimensionKey::ALL
            .into_iter()
            .filter(|k| !self.is_answered(*k))
            .collect()
    }

    /// Snapshot of all six ratings.
    pub fn sheet(&self) -> RatingSheet {
        DimensionKey::ALL
            .into_iter()
            .map(|k| (k, self.rating(k)))
            .collect()
    }
}

impl Default for RatingCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collector_has_defaults_and_no_answers() {
        let collector = RatingCollector::new();
        for key in DimensionKey::ALL {
            assert_eq!(collector.rating(key).value(), 50);
            assert!(!collector.is_answered(key));
        }
        assert_eq!(collector.progress(), 0.0);
    }

    #[test]
    fn set_rating_clamps_below_zero() {
        let mut collector = RatingCollector::new();
        let stored = collector.set_rating(DimensionKey::MentalDemand, -5);
        assert_eq!(stored.value(), 0);
        assert_eq!(collector.rating(DimensionKey::MentalDemand).value(), 0);
    }

    #[test]
    fn set_rating_clamps_above_hundred() {
        let mut collector = RatingCollector::new();
        let stored = collector.set_rating(DimensionKey::Effort, 500);
        assert_eq!(stored.value(), 100);
    }

    #[test]
    fn set_rating_marks_answered_even_when_value_unchanged() {
        let mut collector = RatingCollector::new();
        collector.set_rating(DimensionKey::Frustration, 50);
        assert!(collector.is_answered(DimensionKey::Frustration));
    }

    #[test]
    fn set_rating_is_idempotent() {
        let mut collector = RatingCollector::new();
        collector.set_rating(DimensionKey::PhysicalDemand, 20);
        collector.set_rating(DimensionKey::PhysicalDemand, 20);
        collector.set_rating(DimensionKey::PhysicalDemand, 35);

        assert_eq!(collector.rating(DimensionKey::PhysicalDemand).value(), 35);
        assert_eq!(collector.answered_count(), 1);
    }

    #[test]
    fn progress_counts_answered_fraction() {
        let mut collector = RatingCollector::new();
        collector.set_rating(DimensionKey::MentalDemand, 10);
        collector.set_rating(DimensionKey::PhysicalDemand, 10);
        collector.set_rating(DimensionKey::TemporalDemand, 10);

        assert!((collector.progress() - 0.5).abs() < f64::EPSILON);
        assert!(!collector.is_complete());
        assert_eq!(
            collector.unanswered(),
            vec![
                DimensionKey::Performance,
                DimensionKey::Effort,
                DimensionKey::Frustration
            ]
        );
    }

    #[test]
    fn progress_reaches_one_when_all_answered() {
        let mut collector = RatingCollector::new();
        for key in DimensionKey::ALL {
            collector.set_rating(key, 40);
        }
        assert_eq!(collector.progress(), 1.0);
        assert!(collector.is_complete());
    }

    #[test]
    fn sheet_covers_every_dimension() {
        let mut collector = RatingCollector::new();
        collector.set_rating(DimensionKey::Performance, 20);

        let sheet = collector.sheet();
        assert!(sheet.is_complete());
        assert_eq!(sheet.get(DimensionKey::Performance).unwrap().value(), 20);
        assert_eq!(sheet.get(DimensionKey::Effort).unwrap().value(), 50);
    }
}
