//! Storage Adapters
//!
//! Implementations of the SubmissionStore port for the optional local
//! history of completed assessments.
//!
//! ## Available Adapters
//!
//! - **FileSubmissionStore** - One JSON array file per collection key
//! - **InMemorySubmissionStore** - Stores records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSubmissionStore, InMemorySubmissionStore};
//!
//! // Production: file-based storage
//! let store = FileSubmissionStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemorySubmissionStore::new();
//! ```

mod file_submission_store;
mod in_memory_submission_store;

pub use file_submission_store::FileSubmissionStore;
pub use in_memory_submission_store::InMemorySubmissionStore;
