#[cfg(test)]
#[path = "../../tests/unit/evolution/selection_test.rs"]
mod selection_test;

use crate::utils::Random;

/// Specifies how breeding parents are chosen from a scored population.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Keeps the best half of the population as the breeding pool and draws parents
    /// uniformly from it.
    Truncation,
    /// Samples the given amount of individuals without replacement from the full population
    /// and keeps the best of the sample. Repeated independently for each parent.
    Tournament {
        /// Amount of individuals participating in a single tournament.
        size: usize,
    },
}

impl Default for SelectionStrategy {
    fn default() -> Self {
        Self::Tournament { size: 3 }
    }
}

impl SelectionStrategy {
    /// Picks the index of a single parent. Individuals are expected to be sorted from best
    /// to worst, so the best of a sample is the smallest sampled index.
    pub(crate) fn select(&self, population_size: usize, random: &dyn Random) -> usize {
        debug_assert!(population_size > 0);

        match *self {
            Self::Truncation => {
                let pool = (population_size / 2).max(1);
                random.uniform_int(0, pool as i32 - 1) as usize
            }
            Self::Tournament { size } => random
                .sample_distinct(population_size, size)
                .into_iter()
                .min()
                .expect("empty tournament sample"),
        }
    }
}
