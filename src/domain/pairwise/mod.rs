//! Pairwise module - the 15 forced-choice dimension comparisons.
//!
//! # Components
//!
//! - `ComparisonPair` - Unordered pair of distinct dimensions
//! - `Comparison` - A pair with its (possibly unresolved) answer
//! - `PairwiseScheduler` - Generation, unbiased shuffling, and sequential answering

mod errors;
mod pair;
mod scheduler;

pub use errors::PairwiseError;
pub use pair::{Comparison, ComparisonPair};
pub use scheduler::{PairwiseScheduler, PAIR_COUNT};
