//! Random Source Adapters
//!
//! - **SeededRandomSource** - `StdRng`, either reproducible from a seed or
//!   seeded from OS entropy

mod seeded_random_source;

pub use seeded_random_source::SeededRandomSource;
