//! Parent selection strategies.
//!
//! Selection chooses which tours breed. Both strategies assume
//! **maximization** — higher fitness (shorter tour) is better. The
//! evolution loop calls the active strategy twice per child produced.

use crate::tour::Tour;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use tsp_evolve::Selection;
///
/// // Fitness-proportionate wheel
/// let sel = Selection::Roulette;
///
/// // Two-round binary tournament (the default)
/// let sel = Selection::Tournament;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is each tour's normalized `chance`.
    /// Requires [`evaluate_chances`] to have run on the population this
    /// generation so the weights sum to 1; behavior is out of contract
    /// otherwise.
    ///
    /// # Complexity
    /// O(n) per selection (linear walk)
    Roulette,

    /// Two-round binary tournament.
    ///
    /// Twice, draw 2 tours uniformly at random with replacement and keep
    /// the fitter; return the fitter of the two round winners. Ties go to
    /// the first-seen competitor. Does not need normalized chances.
    ///
    /// # Complexity
    /// O(1) per selection
    #[default]
    Tournament,
}

impl Selection {
    /// Selects one parent from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<'p, R: Rng>(&self, population: &'p [Tour], rng: &mut R) -> &'p Tour {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Roulette => roulette(population, rng),
            Selection::Tournament => tournament(population, rng),
        }
    }
}

/// Normalizes selection weights so they sum to 1 over the population:
/// `chance[i] = fitness[i] / Σ fitness`.
///
/// Must run once per generation, after fitness evaluation and before any
/// [`Selection::Roulette`] draw. Harmless (and unused) under tournament
/// selection. Assumes all fitness values are positive and finite.
pub fn evaluate_chances(population: &mut [Tour]) {
    let total: f64 = population.iter().map(|t| t.fitness).sum();
    for tour in population.iter_mut() {
        tour.chance = tour.fitness / total;
    }
}

/// Wheel walk: subtract each tour's chance from a uniform draw in [0,1)
/// until the remainder goes non-positive.
fn roulette<'p, R: Rng>(population: &'p [Tour], rng: &mut R) -> &'p Tour {
    let mut remainder: f64 = rng.random();
    for tour in population {
        remainder -= tour.chance;
        if remainder <= 0.0 {
            return tour;
        }
    }
    // Floating-point fallback: weights summed to slightly under the draw.
    population.last().expect("population is non-empty")
}

fn tournament<'p, R: Rng>(population: &'p [Tour], rng: &mut R) -> &'p Tour {
    let first = duel(population, rng);
    let second = duel(population, rng);
    if second.fitness > first.fitness {
        second
    } else {
        first
    }
}

/// One tournament round: two uniform draws with replacement, fitter wins,
/// first-seen wins ties.
fn duel<'p, R: Rng>(population: &'p [Tour], rng: &mut R) -> &'p Tour {
    let a = &population[rng.random_range(0..population.len())];
    let b = &population[rng.random_range(0..population.len())];
    if b.fitness > a.fitness {
        b
    } else {
        a
    }
}
