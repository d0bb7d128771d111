//! PairwiseScheduler - Generation, ordering, and answering of the 15 comparisons.

use std::collections::HashSet;

use crate::domain::catalog::{DimensionKey, DIMENSION_COUNT};
use crate::domain::foundation::ValidationError;
use crate::ports::RandomSource;

use super::{Comparison, ComparisonPair, PairwiseError};

/// Number of unordered pairs over the six dimensions (6 choose 2).
pub const PAIR_COUNT: usize = DIMENSION_COUNT * (DIMENSION_COUNT - 1) / 2;

/// Sequential presenter of the comparison schedule.
///
/// # Invariants
///
/// - `pairs` is a permutation of all 15 unordered dimension pairs
/// - `choices[i]` is `Some` exactly for `i < cursor`
/// - every recorded choice is one of its pair's two keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairwiseScheduler {
    pairs: Vec<ComparisonPair>,
    choices: Vec<Option<DimensionKey>>,
    cursor: usize,
}

impl PairwiseScheduler {
    /// All 15 unordered pairs `(i, j)` with `i < j`, in canonical catalog order.
    pub fn generate_pairs() -> Vec<ComparisonPair> {
        let keys = DimensionKey::ALL;
        let mut pairs = Vec::with_capacity(PAIR_COUNT);
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                pairs.push(ComparisonPair::ordered(*a, *b));
            }
        }
        pairs
    }

    /// Returns a uniformly random permutation of `pairs` (Fisher–Yates).
    pub fn randomize<R: RandomSource + ?Sized>(
        pairs: &[ComparisonPair],
        rng: &mut R,
    ) -> Vec<ComparisonPair> {
        let mut shuffled = pairs.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = rng.next_index(i + 1);
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// Creates a schedule over a freshly shuffled set of pairs.
    pub fn shuffled<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let order = Self::randomize(&Self::generate_pairs(), rng);
        Self::from_order_unchecked(order)
    }

    /// Creates a schedule with an explicit presentation order.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` unless `order` holds each of the 15 pairs exactly once
    pub fn with_order(order: Vec<ComparisonPair>) -> Result<Self, ValidationError> {
        let distinct: HashSet<_> = order.iter().copied().collect();
        if order.len() != PAIR_COUNT || distinct.len() != PAIR_COUNT {
            return Err(ValidationError::invalid_format(
                "pair_order",
                format!(
                    "expected {} distinct pairs, got {} ({} distinct)",
                    PAIR_COUNT,
                    order.len(),
                    distinct.len()
                ),
            ));
        }
        Ok(Self::from_order_unchecked(order))
    }

    fn from_order_unchecked(pairs: Vec<ComparisonPair>) -> Self {
        let choices = vec![None; pairs.len()];
        Self {
            pairs,
            choices,
            cursor: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// The pair awaiting an answer, or `None` once complete.
    pub fn current(&self) -> Option<ComparisonPair> {
        self.pairs.get(self.cursor).copied()
    }

    /// Number of answered pairs.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of pairs in the schedule.
    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    /// Pairs in presentation order.
    pub fn pairs(&self) -> &[ComparisonPair] {
        &self.pairs
    }

    /// Recorded answers, aligned with [`pairs`](Self::pairs).
    pub fn choices(&self) -> &[Option<DimensionKey>] {
        &self.choices
    }

    /// Pairs and answers zipped, in presentation order.
    pub fn comparisons(&self) -> Vec<Comparison> {
        self.pairs
            .iter()
            .zip(&self.choices)
            .map(|(pair, chosen)| Comparison {
                pair: *pair,
                chosen: *chosen,
            })
            .collect()
    }

    /// True iff every pair has been answered.
    pub fn is_complete(&self) -> bool {
        self.cursor == PAIR_COUNT
    }

    /// Fraction of pairs answered (0.0 to 1.0).
    pub fn progress(&self) -> f64 {
        self.cursor as f64 / PAIR_COUNT as f64
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records `choice` for the current pair and moves to the next one.
    ///
    /// # Errors
    ///
    /// - `ScheduleExhausted` if all pairs are already answered
    /// - `InvalidChoice` if `choice` is not one of the current pair's keys
    pub fn advance(&mut self, choice: DimensionKey) -> Result<(), PairwiseError> {
        let pair = self.current().ok_or(PairwiseError::ScheduleExhausted {
            total: self.pairs.len(),
        })?;

        if !pair.contains(choice) {
            return Err(PairwiseError::InvalidChoice { choice, pair });
        }

        self.choices[self.cursor] = Some(choice);
        self.cursor += 1;
        Ok(())
    }

    /// Clears all answers and rewinds to the first pair. Order is kept.
    pub fn reset(&mut self) {
        self.choices.iter_mut().for_each(|c| *c = None);
        self.cursor = 0;
    }
}
