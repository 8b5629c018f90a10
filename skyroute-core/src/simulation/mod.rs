//! Provides a deterministic replay of a visiting order under range and capacity depletion.

#[cfg(test)]
#[path = "../../tests/unit/simulation/simulator_test.rs"]
mod simulator_test;

use crate::algorithms::geometry::distance;
use crate::models::{Position, RouteSummary, Scenario, Stop};
use crate::utils::{compare_floats, Float};
use rustc_hash::FxHashSet;

/// Replays visiting orders against a scenario, applying depletion and recharge rules.
///
/// Resource exhaustion is not an error: the replay truncates the route and reports what was
/// actually achievable, so infeasible orders are scored poorly rather than rejected.
pub struct RouteSimulator<'a> {
    scenario: &'a Scenario,
}

impl<'a> RouteSimulator<'a> {
    /// Creates a new instance of `RouteSimulator`.
    pub fn new(scenario: &'a Scenario) -> Self {
        Self { scenario }
    }

    /// Replays the given visiting order with fresh budgets and reports the realized route.
    /// Panics when a route index is out of delivery set bounds.
    pub fn simulate(&self, route: &[usize]) -> RouteSummary {
        let limits = self.scenario.limits();
        let stations = self.scenario.stations();

        let mut position = self.scenario.origin();
        let mut range = limits.max_range;
        let mut capacity = limits.max_capacity;
        let mut used_stations = FxHashSet::<usize>::default();

        let mut stops = vec![Stop::Origin];
        let mut traveled = 0.;
        let mut visited: usize = 0;

        'route: for &index in route {
            loop {
                debug_assert!(range >= 0.);

                let target = self.scenario.deliveries()[index].position;
                let hop = distance(position, target);
                let back = self.scenario.distance_to_origin(position);

                // a safe return cannot be guaranteed anymore: no credit for the aborted hop
                if range < back {
                    break 'route;
                }

                if range < hop || capacity == 0 {
                    match self.nearest_station(position, range, &used_stations) {
                        Some(station) => {
                            traveled += distance(position, stations[station]);
                            position = stations[station];
                            range = limits.max_range;
                            capacity = limits.max_capacity;
                            used_stations.insert(station);
                            stops.push(Stop::Station(station));
                            // retry the same candidate from the station
                            continue;
                        }
                        None => break 'route,
                    }
                }

                range -= hop;
                capacity -= 1;
                traveled += hop;
                position = target;
                stops.push(Stop::Delivery(index));
                visited += 1;
                break;
            }
        }

        if limits.recharge_before_return && stations.contains(&position) {
            range = limits.max_range;
        }

        let back = self.scenario.distance_to_origin(position);
        if range >= back {
            traveled += back;
        } else {
            // the last committed stop counted as visited, but the agent cannot safely
            // leave it anymore: exclude it from the feasible tally
            visited = visited.saturating_sub(1);
        }
        stops.push(Stop::Origin);

        RouteSummary { stops, visited, distance: traveled }
    }

    fn nearest_station(&self, position: Position, range: Float, used: &FxHashSet<usize>) -> Option<usize> {
        self.scenario
            .stations()
            .iter()
            .enumerate()
            .filter(|(index, _)| !used.contains(index))
            .map(|(index, &station)| (index, distance(position, station)))
            .filter(|&(_, reach)| reach <= range)
            .min_by(|a, b| compare_floats(a.1, b.1))
            .map(|(index, _)| index)
    }
}
