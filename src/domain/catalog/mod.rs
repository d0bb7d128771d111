//! Dimension catalog - the fixed vocabulary of workload facets.
//!
//! The catalog is static and immutable; everything else in the domain
//! refers to dimensions through [`DimensionKey`].

mod dimension;

pub use dimension::{Dimension, DimensionKey, CATALOG, DIMENSION_COUNT};
