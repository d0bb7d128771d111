//! The six NASA-TLX workload dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of workload dimensions in the instrument.
pub const DIMENSION_COUNT: usize = 6;

/// Identifier of a workload dimension.
///
/// Serialized as the two-letter code used in exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DimensionKey {
    #[serde(rename = "MD")]
    MentalDemand,
    #[serde(rename = "PD")]
    PhysicalDemand,
    #[serde(rename = "TD")]
    TemporalDemand,
    #[serde(rename = "OP")]
    Performance,
    #[serde(rename = "EF")]
    Effort,
    #[serde(rename = "FR")]
    Frustration,
}

impl DimensionKey {
    /// All keys in canonical catalog order.
    pub const ALL: [DimensionKey; DIMENSION_COUNT] = [
        DimensionKey::MentalDemand,
        DimensionKey::PhysicalDemand,
        DimensionKey::TemporalDemand,
        DimensionKey::Performance,
        DimensionKey::Effort,
        DimensionKey::Frustration,
    ];

    /// Returns the 0-based position in catalog order.
    pub fn order_index(&self) -> usize {
        match self {
            DimensionKey::MentalDemand => 0,
            DimensionKey::PhysicalDemand => 1,
            DimensionKey::TemporalDemand => 2,
            DimensionKey::Performance => 3,
            DimensionKey::Effort => 4,
            DimensionKey::Frustration => 5,
        }
    }

    /// Returns the two-letter export code.
    pub fn code(&self) -> &'static str {
        match self {
            DimensionKey::MentalDemand => "MD",
            DimensionKey::PhysicalDemand => "PD",
            DimensionKey::TemporalDemand => "TD",
            DimensionKey::Performance => "OP",
            DimensionKey::Effort => "EF",
            DimensionKey::Frustration => "FR",
        }
    }

    /// Returns the catalog entry for this key.
    pub fn dimension(&self) -> &'static Dimension {
        &CATALOG[self.order_index()]
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DimensionKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        DimensionKey::ALL
            .into_iter()
            .find(|k| k.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                ValidationError::invalid_format("dimension", format!("unknown key '{}'", s))
            })
    }
}

/// Static description of one workload dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub key: DimensionKey,
    pub title: &'static str,
    pub description: &'static str,
    /// Label of the 0 end of the scale.
    pub low_anchor: &'static str,
    /// Label of the 100 end of the scale.
    pub high_anchor: &'static str,
}

/// The instrument's dimension catalog in canonical order.
pub static CATALOG: [Dimension; DIMENSION_COUNT] = [
    Dimension {
        key: DimensionKey::MentalDemand,
        title: "Mental Demand",
        description: "Thinking, concentration, and decision making required.",
        low_anchor: "Low",
        high_anchor: "Very high",
    },
    Dimension {
        key: DimensionKey::PhysicalDemand,
        title: "Physical Demand",
        description: "Bodily effort: moving, holding, manipulating.",
        low_anchor: "Low",
        high_anchor: "Very high",
    },
    Dimension {
        key: DimensionKey::TemporalDemand,
        title: "Temporal Demand",
        description: "Imposed pace; feeling hurried or rushed.",
        low_anchor: "Low",
        high_anchor: "Very high",
    },
    Dimension {
        key: DimensionKey::Performance,
        title: "Performance",
        description: "How successful you were at the task (100 = very poor performance).",
        low_anchor: "Very good",
        high_anchor: "Failure",
    },
    Dimension {
        key: DimensionKey::Effort,
        title: "Effort",
        description: "Amount of mental and/or physical work needed to reach the goal.",
        low_anchor: "Low",
        high_anchor: "Very high",
    },
    Dimension {
        key: DimensionKey::Frustration,
        title: "Frustration",
        description: "Irritation, stress, discouragement (versus calm and content).",
        low_anchor: "Low",
        high_anchor: "Very high",
    },
];
