//! ComparisonPair and Comparison value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::DimensionKey;
use crate::domain::foundation::ValidationError;

/// Unordered pair of two distinct dimensions.
///
/// Stored with `a` before `b` in catalog order, so `(MD, PD)` and
/// `(PD, MD)` are the same pair. Deserialization goes through
/// [`new`](Self::new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PairFields")]
pub struct ComparisonPair {
    a: DimensionKey,
    b: DimensionKey,
}

#[derive(Deserialize)]
struct PairFields {
    a: DimensionKey,
    b: DimensionKey,
}

impl TryFrom<PairFields> for ComparisonPair {
    type Error = ValidationError;

    fn try_from(fields: PairFields) -> Result<Self, Self::Error> {
        Self::new(fields.a, fields.b)
    }
}

impl ComparisonPair {
    /// Creates a pair, normalizing the order of the two keys.
    pub fn new(x: DimensionKey, y: DimensionKey) -> Result<Self, ValidationError> {
        if x == y {
            return Err(ValidationError::invalid_format(
                "comparison_pair",
                format!("a pair needs two distinct dimensions, got {} twice", x),
            ));
        }
        let (a, b) = if x < y { (x, y) } else { (y, x) };
        Ok(Self { a, b })
    }

    /// Pair from two keys already in catalog order (`a < b`).
    pub(super) fn ordered(a: DimensionKey, b: DimensionKey) -> Self {
        debug_assert!(a < b);
        Self { a, b }
    }

    /// First key in catalog order.
    pub fn a(&self) -> DimensionKey {
        self.a
    }

    /// Second key in catalog order.
    pub fn b(&self) -> DimensionKey {
        self.b
    }

    /// Returns true if `key` is one of the two sides.
    pub fn contains(&self, key: DimensionKey) -> bool {
        self.a == key || self.b == key
    }
}

impl fmt::Display for ComparisonPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.a, self.b)
    }
}

/// One pair in presentation order together with the respondent's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub pair: ComparisonPair,
    pub chosen: Option<DimensionKey>,
}

impl Comparison {
    /// Returns true if the respondent answered this pair.
    pub fn is_resolved(&self) -> bool {
        self.chosen.is_some()
    }
}
