//! Random Source Port - Injected randomness for pair ordering.
//!
//! The pairwise schedule must be unbiased in production yet reproducible
//! in tests, so the domain never reaches for a global RNG. Callers hand
//! it a `RandomSource` instead.

/// Source of uniformly distributed indices.
///
/// # Contract
///
/// `next_index(upper)` must return a value in `0..upper`, with every value
/// equally likely. `upper` is always at least 1.
pub trait RandomSource: Send {
    /// Returns a uniformly chosen index in `[0, upper)`.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}
