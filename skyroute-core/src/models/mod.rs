//! Defines the data model shared by the route simulator and the genetic search.

#[cfg(test)]
#[path = "../../tests/unit/models/models_test.rs"]
mod models_test;

use crate::algorithms::geometry::distance;
use crate::utils::{Float, GenericResult};
use std::ops::Index;

/// A position in 3-D euclidean space.
pub type Position = [Float; 3];

/// A spatial point with an identifier which is stable within its owning collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// An identifier which equals to the point index in the owning collection.
    pub id: usize,
    /// A point position.
    pub position: Position,
}

/// An ordered, indexable collection of delivery points. Indices are the identity used in routes.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a new instance of `PointSet` from raw positions assigning sequential identifiers.
    pub fn new(positions: Vec<Position>) -> Self {
        Self { points: positions.into_iter().enumerate().map(|(id, position)| Point { id, position }).collect() }
    }

    /// Returns a point by its index if it exists.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns amount of points in the collection.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over points in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

/// Specifies limits of the two depleting resources and recharge behavior.
#[derive(Clone, Debug)]
pub struct ResourceLimits {
    /// Maximum travel range restored by a recharge.
    pub max_range: Float,
    /// Maximum payload capacity restored by a recharge, in delivery units.
    pub max_capacity: usize,
    /// Whether budgets are restored before the final return leg when it starts on a station.
    pub recharge_before_return: bool,
}

impl ResourceLimits {
    /// Creates a new instance of `ResourceLimits` with recharge before return enabled.
    /// Returns an error when the range is not a positive finite value or the capacity is zero.
    pub fn new(max_range: Float, max_capacity: usize) -> GenericResult<Self> {
        if !max_range.is_finite() || max_range <= 0. {
            return Err(format!("max range must be a positive finite value, got {max_range}").into());
        }

        if max_capacity == 0 {
            return Err("max capacity must be positive".into());
        }

        Ok(Self { max_range, max_capacity, recharge_before_return: true })
    }
}

/// An immutable problem definition: delivery points, origin, recharge stations, resource limits.
#[derive(Clone, Debug)]
pub struct Scenario {
    deliveries: PointSet,
    origin: Position,
    stations: Vec<Position>,
    limits: ResourceLimits,
}

impl Scenario {
    /// Creates a new instance of `Scenario`.
    ///
    /// A station which coincides spatially with the origin is treated as the origin itself,
    /// so it is excluded from the station list and is not double-counted.
    pub fn new(deliveries: PointSet, origin: Position, stations: Vec<Position>, limits: ResourceLimits) -> Self {
        let stations = stations.into_iter().filter(|station| *station != origin).collect();

        Self { deliveries, origin, stations, limits }
    }

    /// Returns delivery points.
    pub fn deliveries(&self) -> &PointSet {
        &self.deliveries
    }

    /// Returns the origin position where every route starts and ends.
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Returns recharge station positions.
    pub fn stations(&self) -> &[Position] {
        self.stations.as_slice()
    }

    /// Returns resource limits.
    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// Resolves a realized stop into its spatial position.
    /// Panics when a delivery or station index is out of bounds.
    pub fn stop_position(&self, stop: Stop) -> Position {
        match stop {
            Stop::Origin => self.origin,
            Stop::Delivery(index) => self.deliveries[index].position,
            Stop::Station(index) => self.stations[index],
        }
    }

    /// Returns distance from the given position to the origin.
    pub(crate) fn distance_to_origin(&self, position: Position) -> Float {
        distance(position, self.origin)
    }
}

/// A single element of a realized route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stop {
    /// The fixed origin point.
    Origin,
    /// A delivery point referred by its index in the delivery point set.
    Delivery(usize),
    /// A recharge station referred by its index in the scenario station list.
    Station(usize),
}

/// An outcome of a route replay: what the agent actually managed to achieve.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary {
    /// Stops in the order they were reached, always starting and ending at the origin.
    /// Includes forced station visits injected by the recharge recovery.
    pub stops: Vec<Stop>,
    /// Amount of delivery points feasibly visited. When the final return leg is infeasible,
    /// the last committed stop stays in `stops` but is excluded from this tally.
    pub visited: usize,
    /// Total distance traveled, including the return leg when it is feasible.
    pub distance: Float,
}
