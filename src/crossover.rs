//! Order-preserving crossover.
//!
//! Produces one child from two parent tours: a contiguous section of
//! parent 1 is kept intact, and the remaining cities fill in around it in
//! the order they appear in parent 2. Related to Davis's Order Crossover
//! (OX), but with the section re-anchored at its original start offset
//! rather than filled in wraparound order.

use crate::point::Point;
use crate::tour::Tour;
use rand::Rng;

/// Crosses two parents into one child tour.
///
/// Draws `end` uniformly in `[0, N]` and `start` uniformly in
/// `[0, end]`, then assembles the child around parent 1's section. Both
/// draws are inclusive, so the section can run to the last city or be
/// empty (`start == end == N`).
///
/// The child is always a permutation of the shared city set: every city
/// of parent 2 that is not in the copied section appears exactly once in
/// the fill.
///
/// # Panics
/// Panics if the parents have different lengths (contract violation).
pub fn crossover<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
    let n = parent1.cities.len();
    assert_eq!(
        n,
        parent2.cities.len(),
        "parents must have equal length"
    );

    let end = rng.random_range(0..=n);
    let start = rng.random_range(0..=end);
    Tour::from_genes(build_child(&parent1.cities, &parent2.cities, start, end))
}

/// Assembles the child gene sequence for a fixed `start ≤ end ≤ N`.
///
/// The section is `parent1[start .. end + 1]`, end-inclusive and clamped
/// at N — so `start == end` keeps a single city, and `end == N` runs to
/// the last city (or yields an empty section when `start == N` too).
/// This boundary convention is deliberate; changing it changes the
/// search dynamics.
///
/// Leftovers are parent 2's cities not in the section, in parent 2's
/// order; the child is `leftovers[..start] + section + leftovers[start..]`.
fn build_child(parent1: &[Point], parent2: &[Point], start: usize, end: usize) -> Vec<Point> {
    let n = parent1.len();
    let section = &parent1[start..(end + 1).min(n)];

    let leftovers: Vec<Point> = parent2
        .iter()
        .filter(|city| !section.contains(city))
        .copied()
        .collect();

    // start <= leftovers.len() holds for every valid (start, end):
    // the section removes at most n - start cities from the fill.
    let (left, right) = leftovers.split_at(start);

    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(left);
    genes.extend_from_slice(section);
    genes.extend_from_slice(right);
    genes
}
