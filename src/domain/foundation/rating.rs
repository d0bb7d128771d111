//! Workload rating value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A subjective workload rating between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct WorkloadRating(u8);

impl WorkloadRating {
    /// Lowest rating.
    pub const MIN: Self = Self(0);

    /// Highest rating.
    pub const MAX: Self = Self(100);

    /// Value every dimension starts at before the respondent touches it.
    pub const DEFAULT: Self = Self(50);

    /// Creates a rating, clamping into [0, 100].
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a rating, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("rating", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for WorkloadRating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for WorkloadRating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<WorkloadRating> for u8 {
    fn from(rating: WorkloadRating) -> Self {
        rating.0
    }
}

impl fmt::Display for WorkloadRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
