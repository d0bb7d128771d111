//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the workload instrument.

mod errors;
mod ids;
mod rating;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{normalize_identifier, SessionId};
pub use rating::WorkloadRating;
pub use score::Score;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
