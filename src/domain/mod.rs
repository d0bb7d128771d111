//! Domain layer containing the instrument's logic and types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, ratings, scores, errors)
//! - `catalog` - The six workload dimensions
//! - `ratings` - Rating collection and snapshots
//! - `pairwise` - Pair generation, shuffling and sequential answering
//! - `analysis` - Weight tally and score computation (pure)
//! - `result` - The immutable result record and its export views
//! - `session` - Wizard stages and the session manager

pub mod analysis;
pub mod catalog;
pub mod foundation;
pub mod pairwise;
pub mod ratings;
pub mod result;
pub mod session;
