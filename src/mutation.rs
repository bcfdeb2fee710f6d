//! Randomized in-place tour perturbation.
//!
//! Three rearrangement operators — swap, segment reverse, relocate —
//! applied with equal probability to tours picked by the mutation rate.
//! All three are pure rearrangements, so the permutation invariant is
//! preserved by construction.

use crate::point::Point;
use crate::tour::Tour;
use rand::Rng;

/// Mutates each tour of the population independently with probability
/// `rate`.
///
/// For a selected tour, two uniform indices `r1, r2 ∈ [0, N)` are drawn,
/// then one of three equally likely operators runs:
///
/// 1. swap — exchange the cities at `r1` and `r2`;
/// 2. segment reverse — reverse the slice between the two indices;
/// 3. relocate — move the city at `r1` to position `r2`.
///
/// Tours with fewer than two cities are skipped after the rate draw
/// (every operator would be a no-op on them).
///
/// Mutated tours carry stale `fitness`/`chance` values until the caller
/// re-evaluates them.
pub fn mutate<R: Rng>(population: &mut [Tour], rate: f64, rng: &mut R) {
    for tour in population.iter_mut() {
        if rng.random::<f64>() >= rate {
            continue;
        }
        let n = tour.cities.len();
        if n < 2 {
            continue;
        }

        let r1 = rng.random_range(0..n);
        let r2 = rng.random_range(0..n);
        let pick: f64 = rng.random();
        if pick < 1.0 / 3.0 {
            swap(&mut tour.cities, r1, r2);
        } else if pick < 2.0 / 3.0 {
            reverse_segment(&mut tour.cities, r1, r2);
        } else {
            relocate(&mut tour.cities, r1, r2);
        }
    }
}

/// Exchanges the cities at `r1` and `r2`.
fn swap(cities: &mut [Point], r1: usize, r2: usize) {
    cities.swap(r1, r2);
}

/// Reverses the **half-open** segment between the two indices: the
/// indices are ordered so `lo <= hi`, then `cities[lo..hi]` is reversed
/// — the city at `hi` is excluded. An easy off-by-one; the half-open
/// boundary is deliberate and changing it alters the search dynamics.
fn reverse_segment(cities: &mut [Point], r1: usize, r2: usize) {
    let (lo, hi) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    cities[lo..hi].reverse();
}

/// Removes the city at `r1` and reinserts it at `r2`.
///
/// The insertion index is applied to the vector *after* removal, so when
/// `r2 > r1` the effective destination shifts one position relative to
/// the original indexing. Deliberate, as with the segment reverse.
fn relocate(cities: &mut Vec<Point>, r1: usize, r2: usize) {
    let city = cities.remove(r1);
    cities.insert(r2, city);
}
