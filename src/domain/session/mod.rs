//! Session module - wizard stages and the per-respondent session.
//!
//! [`SessionManager`] is the single owner of the in-flight
//! [`SessionContext`]: ratings, pairwise schedule and (once complete)
//! the result record.

mod context;
mod errors;
mod manager;
mod stage;

pub use context::{SessionContext, SessionMetadata};
pub use errors::SessionError;
pub use manager::{PairwiseProgress, SessionManager};
pub use stage::WizardStage;
