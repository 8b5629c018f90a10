//! A command line demo: generates a random delivery scenario, searches for a visiting order
//! and splits it into per-agent feasible legs.

use clap::{Arg, ArgMatches, Command, value_parser};
use skyroute_core::prelude::*;
use std::process;
use std::str::FromStr;
use std::sync::Arc;

fn create_app() -> Command {
    Command::new("skyroute")
        .about("Searches for near-optimal delivery routes under range and payload constraints")
        .arg(Arg::new("deliveries").long("deliveries").short('d').default_value("30").help("Amount of delivery points"))
        .arg(Arg::new("stations").long("stations").short('s').default_value("3").help("Amount of recharge stations"))
        .arg(Arg::new("bound").long("bound").short('b').default_value("100").help("Upper bound of generated coordinates"))
        .arg(Arg::new("agents").long("agents").short('a').default_value("3").help("Amount of agents to split the route across"))
        .arg(Arg::new("max-range").long("max-range").default_value("500").help("Maximum travel range restored by a recharge"))
        .arg(Arg::new("max-capacity").long("max-capacity").default_value("4").help("Maximum payload capacity restored by a recharge"))
        .arg(Arg::new("population-size").long("population-size").default_value("100").help("Amount of individuals in the population"))
        .arg(Arg::new("max-generations").long("max-generations").default_value("500").help("Amount of generations to run"))
        .arg(Arg::new("mutation-rate").long("mutation-rate").default_value("0.1").help("Probability of a swap mutation per child"))
        .arg(
            Arg::new("objective")
                .long("objective")
                .default_value("visited")
                .value_parser(["visited", "distance"])
                .help("Search objective: maximize visited points or minimize traveled distance"),
        )
        .arg(
            Arg::new("selection")
                .long("selection")
                .default_value("tournament")
                .value_parser(["tournament", "truncation"])
                .help("Parent selection strategy"),
        )
        .arg(Arg::new("tournament-size").long("tournament-size").default_value("3").help("Amount of individuals in a tournament"))
        .arg(Arg::new("seed").long("seed").value_parser(value_parser!(u64)).help("Seed for a reproducible run"))
        .arg(Arg::new("log").long("log").default_value("50").help("How often the best known fitness is logged, in generations"))
}

fn main() {
    let matches = create_app().get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> GenericResult<()> {
    let deliveries: usize = parse_value(matches, "deliveries")?;
    let stations: usize = parse_value(matches, "stations")?;
    let bound: Float = parse_value(matches, "bound")?;
    let agents: usize = parse_value(matches, "agents")?;
    let max_range: Float = parse_value(matches, "max-range")?;
    let max_capacity: usize = parse_value(matches, "max-capacity")?;

    let environment = Arc::new(
        matches.get_one::<u64>("seed").map_or_else(Environment::default, |&seed| Environment::new_repeatable(seed)),
    );

    let scenario = generate_scenario(deliveries, stations, bound, max_range, max_capacity, &environment)?;

    let objective = match matches.get_one::<String>("objective").map(String::as_str) {
        Some("distance") => RouteObjective::MinimizeDistance,
        _ => RouteObjective::MaximizeVisited,
    };
    let selection = match matches.get_one::<String>("selection").map(String::as_str) {
        Some("truncation") => SelectionStrategy::Truncation,
        _ => SelectionStrategy::Tournament { size: parse_value(matches, "tournament-size")? },
    };
    let config = OptimizerConfig {
        population_size: parse_value(matches, "population-size")?,
        generations: parse_value(matches, "max-generations")?,
        mutation_rate: parse_value(matches, "mutation-rate")?,
        selection,
        telemetry: TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_best: parse_value(matches, "log")? },
    };

    let timer = Timer::start();
    let solution = GeneticOptimizer::new(&scenario, objective, config, environment.clone())?.solve();
    let legs = RouteSplitter::new(&scenario).split(&solution.route, agents)?;

    println!("best route: {:?}", solution.route);
    println!("visited points: {} of {}", solution.summary.visited, scenario.deliveries().len());
    println!("total distance: {:.2}", solution.summary.distance);
    println!("elapsed: {}ms", timer.elapsed_millis());

    for (index, leg) in legs.iter().enumerate() {
        let stops = leg.stops.iter().map(|&stop| format_stop(&scenario, stop)).collect::<Vec<_>>();
        println!("agent {}: visited {}, distance {:.2}, stops {}", index + 1, leg.visited, leg.distance, stops.join(" -> "));
    }

    Ok(())
}

fn generate_scenario(
    deliveries: usize,
    stations: usize,
    bound: Float,
    max_range: Float,
    max_capacity: usize,
    environment: &Environment,
) -> GenericResult<Scenario> {
    let random = environment.random.as_ref();
    let position = |random: &dyn Random| {
        [random.uniform_real(0., bound), random.uniform_real(0., bound), random.uniform_real(0., bound)]
    };

    let deliveries = (0..deliveries).map(|_| position(random)).collect();
    let stations = (0..stations).map(|_| position(random)).collect();
    let limits = ResourceLimits::new(max_range, max_capacity)?;

    Ok(Scenario::new(PointSet::new(deliveries), [0., 0., 0.], stations, limits))
}

fn format_stop(scenario: &Scenario, stop: Stop) -> String {
    let [x, y, z] = scenario.stop_position(stop);
    let label = match stop {
        Stop::Origin => "origin".to_string(),
        Stop::Delivery(index) => format!("point {index}"),
        Stop::Station(index) => format!("station {index}"),
    };

    format!("{label} ({x:.1}, {y:.1}, {z:.1})")
}

fn parse_value<T>(matches: &ArgMatches, name: &str) -> GenericResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .get_one::<String>(name)
        .ok_or_else(|| GenericError::from(format!("missing '{name}' argument")))
        .and_then(|value| {
            value.parse::<T>().map_err(|err| format!("cannot parse '{name}' argument: {err}").into())
        })
}
