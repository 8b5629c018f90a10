use super::*;
use crate::helpers::random::FakeRandom;

#[test]
fn can_default_to_tournament_of_three() {
    assert_eq!(SelectionStrategy::default(), SelectionStrategy::Tournament { size: 3 });
}

#[test]
fn can_select_from_best_half_with_truncation() {
    let random = FakeRandom::new(vec![4], vec![]);

    assert_eq!(SelectionStrategy::Truncation.select(10, &random), 4);
}

#[test]
fn can_keep_truncation_pool_non_empty() {
    let random = FakeRandom::new(vec![0], vec![]);

    assert_eq!(SelectionStrategy::Truncation.select(1, &random), 0);
}

#[test]
fn can_select_best_of_tournament_sample() {
    // the sample without replacement resolves to slots 5, 7 and 2; the best is the smallest
    let random = FakeRandom::new(vec![5, 7, 2], vec![]);

    assert_eq!(SelectionStrategy::Tournament { size: 3 }.select(10, &random), 2);
}

#[test]
fn can_clamp_tournament_to_population_size() {
    let random = FakeRandom::new(vec![1, 1], vec![]);

    assert_eq!(SelectionStrategy::Tournament { size: 3 }.select(2, &random), 0);
}
