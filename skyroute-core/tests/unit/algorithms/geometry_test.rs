use super::*;

#[test]
fn can_calculate_euclidean_distance() {
    assert_eq!(distance([0., 0., 0.], [3., 4., 0.]), 5.);
    assert_eq!(distance([1., 2., 3.], [1., 2., 3.]), 0.);
    assert_eq!(distance([0., 0., 1.], [0., 0., -1.]), 2.);
}

#[test]
fn can_calculate_distance_symmetrically() {
    let (a, b) = ([25., 100., 41.], [28., 68., 57.]);

    assert_eq!(distance(a, b), distance(b, a));
}
