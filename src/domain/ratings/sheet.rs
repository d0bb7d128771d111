//! RatingSheet - snapshot of one respondent's ratings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::{DimensionKey, DIMENSION_COUNT};
use crate::domain::foundation::WorkloadRating;

/// Dimension → rating map, as exported under `ratings_0_100`.
///
/// A sheet produced by [`RatingCollector`](super::RatingCollector) always
/// covers every dimension; sheets built by hand or parsed from JSON may not,
/// which is why [`RatingSheet::is_complete`] exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingSheet(BTreeMap<DimensionKey, WorkloadRating>);

impl RatingSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rating for one dimension.
    pub fn insert(&mut self, key: DimensionKey, rating: WorkloadRating) {
        self.0.insert(key, rating);
    }

    /// Returns the rating for a dimension, if present.
    pub fn get(&self, key: DimensionKey) -> Option<WorkloadRating> {
        self.0.get(&key).copied()
    }

    /// Returns true when every catalog dimension has a rating.
    pub fn is_complete(&self) -> bool {
        self.0.len() == DIMENSION_COUNT
    }

    /// Dimensions with no rating, in catalog order.
    pub fn missing(&self) -> Vec<DimensionKey> {
        DimensionKey::ALL
            .into_iter()
            .filter(|k| !self.0.contains_key(k))
            .collect()
    }

    /// Iterates ratings in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, WorkloadRating)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Sum of all present ratings.
    pub fn total(&self) -> u64 {
        self.0.values().map(|r| u64::from(r.value())).sum()
    }
}

impl FromIterator<(DimensionKey, WorkloadRating)> for RatingSheet {
    fn from_iter<I: IntoIterator<Item = (DimensionKey, WorkloadRating)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
