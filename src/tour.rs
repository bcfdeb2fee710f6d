//! Candidate tours: permutations of the city set with cached fitness.

use crate::point::Point;
use rand::seq::SliceRandom;
use rand::Rng;

/// Numerator of the fitness transform: `fitness = FITNESS_SCALE / length`.
///
/// Higher fitness is better (shorter tour). Any positive constant works;
/// 1000 keeps fitness values in a human-readable range for typical
/// coordinate scales.
pub const FITNESS_SCALE: f64 = 1000.0;

/// One individual in the population: a closed-cycle ordering of all cities.
///
/// # Invariant
///
/// `cities` is always a permutation of the full city set — same length,
/// no duplicates, no omissions. Construction, crossover, and mutation all
/// preserve this.
///
/// # Cached fields
///
/// `fitness` and `chance` (the normalized selection weight) are derived
/// values, recomputed by explicit calls to [`evaluate_fitness`] and
/// [`evaluate_chances`]. They are stale until recomputed after any
/// reordering of `cities`.
///
/// `Clone` is the deep-copy contract of the spec: the cloned `cities`
/// vector is an independent sequence (points are `Copy`), so a retained
/// best-ever tour is never aliased to a live tour that later mutation
/// will modify.
///
/// [`evaluate_fitness`]: Tour::evaluate_fitness
/// [`evaluate_chances`]: crate::evaluate_chances
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Ordered city sequence, treated as a closed cycle.
    pub cities: Vec<Point>,

    /// Cached fitness, `FITNESS_SCALE / length()`. 0.0 until evaluated.
    pub fitness: f64,

    /// Cached selection weight, normalized over the population so weights
    /// sum to 1. 0.0 until [`evaluate_chances`] runs.
    ///
    /// [`evaluate_chances`]: crate::evaluate_chances
    pub chance: f64,
}

impl Tour {
    /// Creates a tour as a uniformly random permutation of `cities`.
    pub fn random<R: Rng>(cities: &[Point], rng: &mut R) -> Self {
        let mut cities = cities.to_vec();
        cities.shuffle(rng);
        Self {
            cities,
            fitness: 0.0,
            chance: 0.0,
        }
    }

    /// Creates a tour that adopts `genes` verbatim as its city order.
    ///
    /// Used by crossover to assemble children. The caller is responsible
    /// for `genes` being a permutation of the full city set.
    pub fn from_genes(genes: Vec<Point>) -> Self {
        Self {
            cities: genes,
            fitness: 0.0,
            chance: 0.0,
        }
    }

    /// Total length of the closed cycle: the sum of consecutive pairwise
    /// distances, including the wraparound edge from the last city back
    /// to the first. Returns 0.0 for tours with fewer than two cities.
    pub fn length(&self) -> f64 {
        let n = self.cities.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.cities[i].distance(&self.cities[(i + 1) % n]))
            .sum()
    }

    /// Recomputes the cached fitness as `FITNESS_SCALE / length()`.
    ///
    /// A zero-length tour (fewer than two cities, or all cities
    /// coincident) yields `+∞` — the documented sentinel for the
    /// degenerate case, never a panic.
    pub fn evaluate_fitness(&mut self) {
        self.fitness = FITNESS_SCALE / self.length();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    // ---- Construction ----

    #[test]
    fn test_random_tour_is_permutation() {
        let cities = square();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let tour = Tour::random(&cities, &mut rng);
            assert_eq!(tour.cities.len(), cities.len());
            for city in &cities {
                assert!(tour.cities.contains(city), "missing city {city:?}");
            }
        }
    }

    #[test]
    fn test_random_tour_from_empty_source() {
        let mut rng = StdRng::seed_from_u64(42);
        let tour = Tour::random(&[], &mut rng);
        assert!(tour.cities.is_empty());
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn test_from_genes_adopts_order_verbatim() {
        let cities = square();
        let tour = Tour::from_genes(cities.clone());
        assert_eq!(tour.cities, cities);
    }

    // ---- Length ----

    #[test]
    fn test_unit_square_perimeter() {
        let tour = Tour::from_genes(square());
        assert!((tour.length() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_zero_for_single_city() {
        let tour = Tour::from_genes(vec![Point::new(5.0, 5.0)]);
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn test_length_invariant_under_rotation() {
        let mut genes = square();
        let tour = Tour::from_genes(genes.clone());
        let expected = tour.length();
        for _ in 0..genes.len() {
            genes.rotate_left(1);
            let rotated = Tour::from_genes(genes.clone());
            assert!((rotated.length() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_length_invariant_under_reversal() {
        let mut genes = square();
        let forward = Tour::from_genes(genes.clone());
        genes.reverse();
        let backward = Tour::from_genes(genes);
        assert!((forward.length() - backward.length()).abs() < 1e-12);
    }

    #[test]
    fn test_two_city_tour_counts_both_directions() {
        let tour = Tour::from_genes(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        // Out and back along the same edge.
        assert!((tour.length() - 10.0).abs() < 1e-12);
    }

    // ---- Fitness ----

    #[test]
    fn test_fitness_is_scale_over_length() {
        let mut tour = Tour::from_genes(square());
        tour.evaluate_fitness();
        assert_eq!(tour.fitness, FITNESS_SCALE / tour.length());
    }

    #[test]
    fn test_fitness_infinite_for_degenerate_tour() {
        let mut tour = Tour::from_genes(vec![Point::new(1.0, 1.0)]);
        tour.evaluate_fitness();
        assert!(tour.fitness.is_infinite());
    }

    // ---- Deep copy ----

    #[test]
    fn test_clone_is_independent() {
        let mut original = Tour::from_genes(square());
        original.evaluate_fitness();
        let copy = original.clone();

        original.cities.swap(0, 2);

        assert_ne!(original.cities, copy.cities);
        assert_eq!(copy.cities, square());
        assert_eq!(copy.fitness, FITNESS_SCALE / 4.0);
    }
}
