//! Weight Tally - Reduces pairwise answers into per-dimension win counts.

use crate::domain::catalog::DimensionKey;
use crate::domain::pairwise::PairwiseScheduler;

use super::Weights;

/// Pairwise choice tallying functions.
pub struct WeightTally;

impl WeightTally {
    /// Counts how often each dimension was chosen.
    ///
    /// # Algorithm
    /// For each resolved choice: weight[choice] += 1
    ///
    /// # Edge Cases
    /// - Unresolved entries contribute nothing
    /// - Dimensions never chosen stay at 0
    /// - `total()` of the result equals the number of resolved entries
    pub fn tally(choices: &[Option<DimensionKey>]) -> Weights {
        let mut weights = Weights::zero();
        for chosen in choices.iter().flatten() {
            weights.increment(*chosen);
        }
        weights
    }

    /// Tallies the answers recorded by a schedule.
    pub fn from_schedule(scheduler: &PairwiseScheduler) -> Weights {
        Self::tally(scheduler.choices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pairwise::PAIR_COUNT;
    use crate::ports::RandomSource;
    use proptest::prelude::*;
    use DimensionKey::*;

    struct FixedRandom(usize);

    impl RandomSource for FixedRandom {
        fn next_index(&mut self, upper: usize) -> usize {
            self.0 % upper
        }
    }

    #[test]
    fn tally_counts_each_resolved_choice() {
        let weights = WeightTally::tally(&[
            Some(MentalDemand),
            Some(MentalDemand),
            Some(Effort),
            None,
            Some(Frustration),
        ]);

        assert_eq!(weights.get(MentalDemand), 2);
        assert_eq!(weights.get(Effort), 1);
        assert_eq!(weights.get(Frustration), 1);
        assert_eq!(weights.get(PhysicalDemand), 0);
        assert_eq!(weights.total(), 4);
    }

    #[test]
    fn tally_of_nothing_is_all_zero() {
        let weights = WeightTally::tally(&[]);
        assert_eq!(weights, Weights::zero());

        let unresolved = WeightTally::tally(&[None; PAIR_COUNT]);
        assert_eq!(unresolved.total(), 0);
    }

    #[test]
    fn tally_of_partial_schedule_matches_cursor() {
        let mut scheduler = PairwiseScheduler::shuffled(&mut FixedRandom(3));
        for _ in 0..7 {
            let pair = scheduler.current().unwrap();
            scheduler.advance(pair.b()).unwrap();
        }

        let weights = WeightTally::from_schedule(&scheduler);
        assert_eq!(weights.total(), 7);
        assert!(!weights.is_complete());
    }

    #[test]
    fn dominant_dimension_reaches_five() {
        let mut scheduler = PairwiseScheduler::shuffled(&mut FixedRandom(0));
        while let Some(pair) = scheduler.current() {
            let pick = if pair.contains(Effort) { Effort } else { pair.a() };
            scheduler.advance(pick).unwrap();
        }

        let weights = WeightTally::from_schedule(&scheduler);
        assert_eq!(weights.get(Effort), 5);
        assert!(weights.is_complete());
    }

    proptest! {
        #[test]
        fn any_fifteen_answers_sum_to_fifteen(
            seed in 0usize..10_000,
            picks in proptest::collection::vec(any::<bool>(), PAIR_COUNT),
        ) {
            let mut scheduler = PairwiseScheduler::shuffled(&mut FixedRandom(seed));
            for pick_first in picks {
                let pair = scheduler.current().unwrap();
                scheduler.advance(if pick_first { pair.a() } else { pair.b() }).unwrap();
            }

            let weights = WeightTally::from_schedule(&scheduler);
            prop_assert_eq!(weights.total(), 15);
            for key in DimensionKey::ALL {
                prop_assert!(weights.get(key) <= 5);
            }
        }
    }
}
