//! Ratings module - collection of the six 0-100 workload ratings.

mod collector;
mod sheet;

pub use collector::RatingCollector;
pub use sheet::RatingSheet;
