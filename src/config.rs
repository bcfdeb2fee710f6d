//! Run configuration.
//!
//! [`EvolveConfig`] holds every parameter that controls the evolutionary
//! loop.

use crate::selection::Selection;

/// Configuration for an evolution run.
///
/// The defaults are the reference parameters for small instances:
/// population 50, mutation rate 0.35, tournament selection. The
/// reference ran 5000 generations; the default here is a more modest
/// 500, raise it for hard instances.
///
/// # Builder Pattern
///
/// ```
/// use tsp_evolve::{EvolveConfig, Selection};
///
/// let config = EvolveConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Roulette)
///     .with_mutation_rate(0.2)
///     .with_seed(14);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Number of tours in the population. Fixed for the whole run; the
    /// population is fully replaced each generation.
    pub population_size: usize,

    /// Probability that any one tour is mutated each generation (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations to run. The loop is bounded only by this
    /// count; there is no convergence-based early stop.
    pub generations: usize,

    /// Strategy for choosing parents.
    pub selection: Selection,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Reproducing a run requires the same
    /// seed and the same configuration, since every randomized step
    /// consumes draws from the one generator in a fixed order.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.35,
            generations: 500,
            selection: Selection::default(),
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the generation count.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// The runner rejects invalid configurations before the loop starts.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        Ok(())
    }
}
