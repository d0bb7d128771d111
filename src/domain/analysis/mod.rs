//! Analysis Module - Pure domain services for workload scoring.
//!
//! # Components
//!
//! - `Weights` - Per-dimension pairwise win counts (0-5, summing to 15)
//! - `WeightTally` - Reduces pairwise answers into weights
//! - `ScoreEngine` - Weighted and raw composite scores, per-dimension breakdown
//!
//! All functions are pure (no side effects) and stateless. No ports or
//! adapters are involved since there's no I/O.

mod score_engine;
mod weight_tally;
mod weights;

pub use score_engine::{DimensionContribution, ScoreEngine, ScoreError};
pub use weight_tally::WeightTally;
pub use weights::{Weights, MAX_WEIGHT};
