use super::*;
use crate::helpers::*;
use std::cell::RefCell;
use std::rc::Rc;

fn create_environment(seed: u64) -> Arc<Environment> {
    Arc::new(Environment::new_repeatable(seed))
}

fn create_config(generations: usize) -> OptimizerConfig {
    OptimizerConfig { population_size: 20, generations, ..OptimizerConfig::default() }
}

#[test]
fn can_reject_invalid_configuration() {
    let scenario = create_five_point_scenario(1000., 10);

    [
        OptimizerConfig { population_size: 0, ..OptimizerConfig::default() },
        OptimizerConfig { generations: 0, ..OptimizerConfig::default() },
        OptimizerConfig { mutation_rate: 1.5, ..OptimizerConfig::default() },
        OptimizerConfig { mutation_rate: -0.1, ..OptimizerConfig::default() },
        OptimizerConfig { selection: SelectionStrategy::Tournament { size: 0 }, ..OptimizerConfig::default() },
    ]
    .into_iter()
    .for_each(|config| {
        let result = GeneticOptimizer::new(&scenario, RouteObjective::MaximizeVisited, config, create_environment(1));
        assert!(result.is_err());
    });
}

#[test]
fn can_find_route_visiting_all_points() {
    let scenario = create_five_point_scenario(1000., 10);
    let optimizer =
        GeneticOptimizer::new(&scenario, RouteObjective::MinimizeDistance, create_config(50), create_environment(42))
            .expect("cannot create optimizer");

    let solution = optimizer.solve();

    let mut sorted = solution.route.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    assert_eq!(solution.summary.visited, 5);
    assert_eq!(solution.fitness, solution.summary.distance);
}

#[test]
fn can_solve_with_truncation_selection() {
    let scenario = create_five_point_scenario(1000., 10);
    let config = OptimizerConfig {
        population_size: 10,
        generations: 10,
        selection: SelectionStrategy::Truncation,
        ..OptimizerConfig::default()
    };
    let optimizer = GeneticOptimizer::new(&scenario, RouteObjective::MinimizeDistance, config, create_environment(3))
        .expect("cannot create optimizer");

    let solution = optimizer.solve();

    let mut sorted = solution.route.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
}

#[test]
fn can_reproduce_run_with_same_seed() {
    let scenario = create_five_point_scenario(200., 3);
    let solve = |seed: u64| {
        GeneticOptimizer::new(&scenario, RouteObjective::MaximizeVisited, create_config(10), create_environment(seed))
            .expect("cannot create optimizer")
            .solve()
    };

    let (first, second) = (solve(7), solve(7));

    assert_eq!(first.route, second.route);
    assert_eq!(first.fitness, second.fitness);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn can_keep_best_fitness_from_regressing() {
    // the same seed replays the same draw sequence, so a longer run extends the shorter one
    let scenario = create_line_scenario(8, 10., vec![[15., 0., 0.]], 60., 3);
    let solve = |generations: usize| {
        GeneticOptimizer::new(
            &scenario,
            RouteObjective::MaximizeVisited,
            create_config(generations),
            create_environment(11),
        )
        .expect("cannot create optimizer")
        .solve()
    };

    let (short, long) = (solve(5), solve(25));

    assert_ne!(RouteObjective::MaximizeVisited.total_order(long.fitness, short.fitness), Ordering::Greater);
}

#[test]
fn can_log_progress_with_telemetry() {
    let lines: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = lines.clone();
    let scenario = create_five_point_scenario(1000., 10);
    let config = OptimizerConfig {
        population_size: 5,
        generations: 3,
        telemetry: TelemetryMode::OnlyLogging {
            logger: Arc::new(move |msg: &str| sink.borrow_mut().push(msg.to_string())),
            log_best: 1,
        },
        ..OptimizerConfig::default()
    };

    GeneticOptimizer::new(&scenario, RouteObjective::MaximizeVisited, config, create_environment(5))
        .expect("cannot create optimizer")
        .solve();

    let lines = lines.borrow();
    assert_eq!(lines.len(), 5);
    assert!(lines.first().expect("no log lines").contains("generation 0"));
    assert!(lines.last().expect("no log lines").contains("search finished"));
}
