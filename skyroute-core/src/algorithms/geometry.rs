//! Provides a distance metric for points in 3-D euclidean space.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/geometry_test.rs"]
mod geometry_test;

use crate::models::Position;
use crate::utils::Float;

/// Returns euclidean distance between two positions.
#[inline]
pub fn distance(a: Position, b: Position) -> Float {
    a.iter().zip(b.iter()).map(|(&x, &y)| (x - y) * (x - y)).sum::<Float>().sqrt()
}
