#[cfg(test)]
#[path = "../../tests/unit/evolution/operators_test.rs"]
mod operators_test;

use crate::utils::{Float, Random};

const UNFILLED: usize = usize::MAX;

/// Applies order crossover (OX) to two parent routes and returns a new child route.
///
/// A random segment (inclusive of both cut points) is copied verbatim from the first parent,
/// then the remaining genes are placed in the relative order of the second parent. The fill
/// pointer scans strictly forward, skipping slots occupied by the copied segment.
///
/// Both parents must be permutations of `0..len` of the same length; the child is then
/// a permutation of the same index set.
pub fn order_crossover(parent_a: &[usize], parent_b: &[usize], random: &dyn Random) -> Vec<usize> {
    let size = parent_a.len();
    debug_assert_eq!(size, parent_b.len());

    if size < 2 {
        return parent_a.to_vec();
    }

    let (first, second) = random.distinct_pair(size);
    let (start, end) = (first.min(second), first.max(second));

    let mut child = vec![UNFILLED; size];
    child[start..=end].copy_from_slice(&parent_a[start..=end]);

    let mut taken = vec![false; size];
    parent_a[start..=end].iter().for_each(|&gene| taken[gene] = true);

    let mut slot = 0;
    for &gene in parent_b {
        if taken[gene] {
            continue;
        }

        while child[slot] != UNFILLED {
            slot += 1;
        }

        child[slot] = gene;
    }

    debug_assert!(child.iter().all(|&gene| gene != UNFILLED));

    child
}

/// Swaps two distinct random positions of the route with the given per-child probability.
pub fn swap_mutation(mut route: Vec<usize>, mutation_rate: Float, random: &dyn Random) -> Vec<usize> {
    if route.len() > 1 && random.is_hit(mutation_rate) {
        let (first, second) = random.distinct_pair(route.len());
        route.swap(first, second);
    }

    route
}
