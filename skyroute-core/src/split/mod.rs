//! Provides partitioning of a single visiting order into independent per-agent legs.

#[cfg(test)]
#[path = "../../tests/unit/split/split_test.rs"]
mod split_test;

use crate::models::{RouteSummary, Scenario};
use crate::simulation::RouteSimulator;
use crate::utils::GenericResult;

/// Splits a visiting order into contiguous blocks and replays each block independently.
///
/// This is a pure post-processing pass: agents share no budget or visited-station state,
/// so each of them may reuse the same recharge station.
pub struct RouteSplitter<'a> {
    simulator: RouteSimulator<'a>,
}

impl<'a> RouteSplitter<'a> {
    /// Creates a new instance of `RouteSplitter`.
    pub fn new(scenario: &'a Scenario) -> Self {
        Self { simulator: RouteSimulator::new(scenario) }
    }

    /// Splits the route into near-equal contiguous blocks, one per agent, and replays each
    /// with fresh budgets. Returns an error when the amount of agents is zero.
    pub fn split(&self, route: &[usize], agents: usize) -> GenericResult<Vec<RouteSummary>> {
        if agents == 0 {
            return Err("amount of agents must be positive".into());
        }

        Ok(split_blocks(route, agents).map(|block| self.simulator.simulate(block)).collect())
    }
}

/// Yields contiguous blocks whose sizes differ by at most one, larger blocks first.
fn split_blocks(route: &[usize], amount: usize) -> impl Iterator<Item = &[usize]> + '_ {
    let base = route.len() / amount;
    let extra = route.len() % amount;
    let mut offset = 0;

    (0..amount).map(move |index| {
        let size = base + usize::from(index < extra);
        let block = &route[offset..offset + size];
        offset += size;

        block
    })
}
