use super::*;
use crate::models::Stop;

fn create_summary(visited: usize, distance: Float) -> RouteSummary {
    RouteSummary { stops: vec![Stop::Origin, Stop::Origin], visited, distance }
}

#[test]
fn can_extract_fitness_by_objective() {
    let summary = create_summary(3, 42.5);

    assert_eq!(RouteObjective::MinimizeDistance.fitness(&summary), 42.5);
    assert_eq!(RouteObjective::MaximizeVisited.fitness(&summary), 3.);
}

#[test]
fn can_order_distance_ascending() {
    let objective = RouteObjective::MinimizeDistance;

    assert_eq!(objective.total_order(1., 2.), Ordering::Less);
    assert_eq!(objective.total_order(2., 1.), Ordering::Greater);
    assert_eq!(objective.total_order(1., 1.), Ordering::Equal);
}

#[test]
fn can_order_visited_count_descending() {
    let objective = RouteObjective::MaximizeVisited;

    assert_eq!(objective.total_order(5., 2.), Ordering::Less);
    assert_eq!(objective.total_order(2., 5.), Ordering::Greater);
}

#[test]
fn can_order_nan_as_worst() {
    for objective in [RouteObjective::MinimizeDistance, RouteObjective::MaximizeVisited] {
        assert_eq!(objective.total_order(Float::NAN, 1.), Ordering::Greater);
        assert_eq!(objective.total_order(1., Float::NAN), Ordering::Less);
        assert_eq!(objective.total_order(Float::NAN, Float::NAN), Ordering::Equal);
    }
}
