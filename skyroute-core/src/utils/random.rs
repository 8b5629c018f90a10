#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
///
/// Sampling helpers are provided as default methods built on top of `uniform_int`, so that any
/// implementation (including scripted test doubles) exposes the same draw sequence.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the interval [min, max).
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool {
        self.uniform_real(0., 1.) < probability
    }

    /// Returns a random permutation of `0..size`.
    fn permutation(&self, size: usize) -> Vec<usize> {
        let mut indices = (0..size).collect::<Vec<_>>();
        for index in (1..size).rev() {
            let other = self.uniform_int(0, index as i32) as usize;
            indices.swap(index, other);
        }

        indices
    }

    /// Returns two distinct indices from `0..size`. Size must be greater than one.
    fn distinct_pair(&self, size: usize) -> (usize, usize) {
        assert!(size > 1);

        let first = self.uniform_int(0, size as i32 - 1) as usize;
        let second = self.uniform_int(0, size as i32 - 2) as usize;
        let second = if second >= first { second + 1 } else { second };

        (first, second)
    }

    /// Samples the given amount of distinct indices from `0..size` without replacement.
    fn sample_distinct(&self, size: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(size);
        let mut indices = (0..size).collect::<Vec<_>>();
        for index in 0..amount {
            let other = self.uniform_int(index as i32, size as i32 - 1) as usize;
            indices.swap(index, other);
        }
        indices.truncate(amount);

        indices
    }
}

/// A default random implementation backed by a small PRNG instance.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(SmallRng::from_rng(thread_rng()).expect("cannot get RNG")) }
    }
}

impl DefaultRandom {
    /// Creates an instance which replays the same draw sequence for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }
}
