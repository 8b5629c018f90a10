//! Provides a genetic search over delivery visiting orders.

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolution_test.rs"]
mod evolution_test;

mod objectives;
pub use self::objectives::*;

mod operators;
pub use self::operators::*;

mod selection;
pub use self::selection::*;

mod telemetry;
pub use self::telemetry::*;

use crate::models::{RouteSummary, Scenario};
use crate::simulation::RouteSimulator;
use crate::utils::{Environment, Float, GenericResult};
use std::cmp::Ordering;
use std::sync::Arc;

/// A candidate visiting order with its cached fitness.
///
/// Individuals are never mutated after scoring: evolution operators always produce new routes.
#[derive(Clone, Debug)]
pub struct Individual {
    /// A permutation of all delivery indices.
    pub route: Vec<usize>,
    /// A cached scalar fitness, interpreted by the configured objective.
    pub fitness: Float,
}

/// Specifies parameters of the genetic search.
#[derive(Clone)]
pub struct OptimizerConfig {
    /// Amount of individuals kept constant across generations.
    pub population_size: usize,
    /// Amount of generations to run.
    pub generations: usize,
    /// Probability of a swap mutation, evaluated once per child.
    pub mutation_rate: Float,
    /// A parent selection strategy.
    pub selection: SelectionStrategy,
    /// A telemetry mode.
    pub telemetry: TelemetryMode,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.1,
            selection: SelectionStrategy::default(),
            telemetry: TelemetryMode::None,
        }
    }
}

impl OptimizerConfig {
    fn validate(&self) -> GenericResult<()> {
        if self.population_size == 0 {
            return Err("population size must be positive".into());
        }

        if self.generations == 0 {
            return Err("amount of generations must be positive".into());
        }

        if !(0. ..=1.).contains(&self.mutation_rate) {
            return Err(format!("mutation rate must be within [0., 1.], got {}", self.mutation_rate).into());
        }

        if let SelectionStrategy::Tournament { size: 0 } = self.selection {
            return Err("tournament size must be positive".into());
        }

        Ok(())
    }
}

/// A best visiting order found by the search.
#[derive(Clone, Debug)]
pub struct OptimizerSolution {
    /// A permutation of all delivery indices.
    pub route: Vec<usize>,
    /// A fitness of the route under the configured objective.
    pub fitness: Float,
    /// A replay summary of the route.
    pub summary: RouteSummary,
}

/// Evolves a population of visiting orders, scoring each individual with the route simulator.
pub struct GeneticOptimizer<'a> {
    simulator: RouteSimulator<'a>,
    objective: RouteObjective,
    config: OptimizerConfig,
    environment: Arc<Environment>,
    route_size: usize,
}

impl<'a> GeneticOptimizer<'a> {
    /// Creates a new instance of `GeneticOptimizer` or returns an error when the
    /// configuration is invalid.
    pub fn new(
        scenario: &'a Scenario,
        objective: RouteObjective,
        config: OptimizerConfig,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        config.validate()?;

        Ok(Self {
            simulator: RouteSimulator::new(scenario),
            objective,
            config,
            environment,
            route_size: scenario.deliveries().len(),
        })
    }

    /// Runs the evolution and returns the best visiting order seen at any generation.
    pub fn solve(&self) -> OptimizerSolution {
        let random = self.environment.random.as_ref();
        let telemetry = Telemetry::new(self.config.telemetry.clone());

        let mut population = (0..self.config.population_size)
            .map(|_| self.evaluate(random.permutation(self.route_size)))
            .collect::<Vec<_>>();
        self.sort(&mut population);

        // track the running best explicitly: elitism alone does not guarantee that the
        // final generation contains the best ever seen individual
        let mut best = population[0].clone();
        telemetry.on_generation(0, best.fitness, true);

        for generation in 1..=self.config.generations {
            let mut offspring = Vec::with_capacity(self.config.population_size);
            offspring.push(population[0].clone());

            while offspring.len() < self.config.population_size {
                let parent_a = &population[self.config.selection.select(population.len(), random)];
                let parent_b = &population[self.config.selection.select(population.len(), random)];

                let child = order_crossover(&parent_a.route, &parent_b.route, random);
                let child = swap_mutation(child, self.config.mutation_rate, random);

                offspring.push(self.evaluate(child));
            }

            population = offspring;
            self.sort(&mut population);

            let is_improved = self.objective.total_order(population[0].fitness, best.fitness) == Ordering::Less;
            if is_improved {
                best = population[0].clone();
            }

            telemetry.on_generation(generation, best.fitness, is_improved);
        }

        telemetry.on_result(self.config.generations, best.fitness);

        let summary = self.simulator.simulate(&best.route);
        OptimizerSolution { route: best.route, fitness: best.fitness, summary }
    }

    fn evaluate(&self, route: Vec<usize>) -> Individual {
        let summary = self.simulator.simulate(&route);
        Individual { fitness: self.objective.fitness(&summary), route }
    }

    /// Sorts individuals from best to worst. The sort is stable, so fitness ties keep
    /// the first-encountered individual ahead.
    fn sort(&self, population: &mut [Individual]) {
        population.sort_by(|a, b| self.objective.total_order(a.fitness, b.fitness));
    }
}
