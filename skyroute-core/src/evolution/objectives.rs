#[cfg(test)]
#[path = "../../tests/unit/evolution/objectives_test.rs"]
mod objectives_test;

use crate::models::RouteSummary;
use crate::utils::{compare_floats, Float};
use std::cmp::Ordering;

/// Specifies what the search optimizes for. Both modes share the same replay mechanics,
/// only the metric extracted from the summary differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteObjective {
    /// Prefers the shortest total traveled distance.
    MinimizeDistance,
    /// Prefers the largest amount of feasibly visited delivery points.
    MaximizeVisited,
}

impl RouteObjective {
    /// Extracts a scalar fitness value from a replay summary.
    pub fn fitness(&self, summary: &RouteSummary) -> Float {
        match self {
            Self::MinimizeDistance => summary.distance,
            Self::MaximizeVisited => summary.visited as Float,
        }
    }

    /// Defines a total order on fitness values where `Less` means better.
    /// `NaN` is ordered as the worst value under both objectives.
    pub fn total_order(&self, a: Float, b: Float) -> Ordering {
        match self {
            Self::MinimizeDistance => compare_floats(a, b),
            Self::MaximizeVisited if a.is_nan() || b.is_nan() => compare_floats(a, b),
            Self::MaximizeVisited => compare_floats(b, a),
        }
    }
}
