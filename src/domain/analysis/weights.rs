//! Weights value object - pairwise win counts per dimension.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::{DimensionKey, DIMENSION_COUNT};
use crate::domain::foundation::ValidationError;
use crate::domain::pairwise::PAIR_COUNT;

/// Most wins a single dimension can collect (it appears in 5 pairs).
pub const MAX_WEIGHT: u8 = (DIMENSION_COUNT - 1) as u8;

/// Dimension → win count, as exported under `weights_0_5`.
///
/// # Invariants
///
/// - Every catalog dimension is present
/// - Each weight is in [0, 5]
/// - The total never exceeds 15
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<DimensionKey, u8>", into = "BTreeMap<DimensionKey, u8>")]
pub struct Weights([u8; DIMENSION_COUNT]);

impl Weights {
    /// All-zero weights (no resolved comparisons).
    pub fn zero() -> Self {
        Self([0; DIMENSION_COUNT])
    }

    /// Builds weights from explicit counts, validating the invariants.
    pub fn from_counts(
        counts: impl IntoIterator<Item = (DimensionKey, u8)>,
    ) -> Result<Self, ValidationError> {
        let mut weights = [None; DIMENSION_COUNT];
        for (key, count) in counts {
            if count > MAX_WEIGHT {
                return Err(ValidationError::out_of_range(
                    key.code(),
                    0,
                    i64::from(MAX_WEIGHT),
                    i64::from(count),
                ));
            }
            weights[key.order_index()] = Some(count);
        }

        let mut resolved = [0u8; DIMENSION_COUNT];
        for key in DimensionKey::ALL {
            resolved[key.order_index()] = weights[key.order_index()].ok_or_else(|| {
                ValidationError::invalid_format("weights", format!("missing weight for {}", key))
            })?;
        }

        let weights = Self(resolved);
        if weights.total() > PAIR_COUNT as u32 {
            return Err(ValidationError::out_of_range(
                "weights_total",
                0,
                PAIR_COUNT as i64,
                i64::from(weights.total()),
            ));
        }
        Ok(weights)
    }

    /// Increments one dimension's count. Used by the tally only.
    pub(super) fn increment(&mut self, key: DimensionKey) {
        let slot = &mut self.0[key.order_index()];
        *slot = slot.saturating_add(1);
    }

    /// Returns the weight of a dimension.
    pub fn get(&self, key: DimensionKey) -> u8 {
        self.0[key.order_index()]
    }

    /// Sum over all six dimensions.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|w| u32::from(*w)).sum()
    }

    /// True when the weights come from a complete schedule (total == 15).
    pub fn is_complete(&self) -> bool {
        self.total() == PAIR_COUNT as u32
    }

    /// Iterates weights in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, u8)> + '_ {
        DimensionKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

impl TryFrom<BTreeMap<DimensionKey, u8>> for Weights {
    type Error = ValidationError;

    fn try_from(map: BTreeMap<DimensionKey, u8>) -> Result<Self, Self::Error> {
        Self::from_counts(map)
    }
}

impl From<Weights> for BTreeMap<DimensionKey, u8> {
    fn from(weights: Weights) -> Self {
        weights.iter().collect()
    }
}
