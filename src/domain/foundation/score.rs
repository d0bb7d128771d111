//! Score value object with exact two-decimal rounding.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A non-negative composite score held as a whole number of hundredths.
///
/// Scores are always ratios of integer sums (Σ rating·weight / 15,
/// Σ rating / 6), so rounding happens on the ratio itself in integer
/// arithmetic. The rule is round-half-away-from-zero; for non-negative
/// values that is "half up".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score {
    hundredths: u64,
}

impl Score {
    pub const ZERO: Self = Self { hundredths: 0 };

    /// `round2(numerator / denominator)`.
    ///
    /// A zero denominator yields zero.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        // floor((n * 100 + d / 2) / d) with the half computed exactly by doubling
        let scaled = numerator * 200 + denominator;
        Self {
            hundredths: scaled / (denominator * 2),
        }
    }

    /// Creates a score from a whole number of hundredths.
    pub fn from_hundredths(hundredths: u64) -> Self {
        Self { hundredths }
    }

    /// Returns the score in hundredths.
    pub fn hundredths(&self) -> u64 {
        self.hundredths
    }

    /// Returns the score as a float (e.g. `61.33`).
    pub fn value(&self) -> f64 {
        self.hundredths as f64 / 100.0
    }
}

impl TryFrom<f64> for Score {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::invalid_format(
                "score",
                format!("expected a non-negative number, got {}", value),
            ));
        }
        Ok(Self {
            hundredths: (value * 100.0).round() as u64,
        })
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}
