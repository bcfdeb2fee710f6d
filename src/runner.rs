//! Evolutionary loop execution.
//!
//! [`EvolveRunner`] orchestrates the complete run:
//! initialization → evaluation → selection → crossover → mutation →
//! re-evaluation → best-ever tracking, repeated for a fixed generation
//! count.

use crate::config::EvolveConfig;
use crate::crossover::crossover;
use crate::mutation::mutate;
use crate::point::Point;
use crate::selection::evaluate_chances;
use crate::tour::Tour;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Read-only snapshot of a finished run, suitable for plotting or
/// reporting.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveResult {
    /// The best tour observed across all generations, held as an
    /// independent deep copy.
    pub best: Tour,

    /// Closed-cycle length of `best`.
    pub best_length: f64,

    /// Number of generations executed (always the configured count).
    pub generations: usize,

    /// Length of each generation's best tour, in generation order.
    ///
    /// Records the per-generation observed best, which may fluctuate:
    /// without elitism a generation can be worse than its predecessor.
    pub distance_history: Vec<f64>,

    /// Fitness of each generation's best tour, parallel to
    /// `distance_history`.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_evolve::{EvolveConfig, EvolveRunner, Point};
///
/// let cities = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ];
/// let config = EvolveConfig::default().with_generations(50).with_seed(14);
/// let result = EvolveRunner::run(&cities, &config);
/// assert!(result.best_length >= 4.0 - 1e-9);
/// ```
pub struct EvolveRunner;

impl EvolveRunner {
    /// Runs the evolution over the given city set.
    ///
    /// Each generation fully replaces the population: `population_size`
    /// children are bred (two independent selection calls and one
    /// crossover each), the whole brood is mutated, then re-evaluated.
    /// There is no elitism — the best individual survives only through
    /// the separately tracked best-ever copy, updated on strict fitness
    /// improvement.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`EvolveConfig::validate`] first to get a descriptive error).
    pub fn run(cities: &[Point], config: &EvolveConfig) -> EvolveResult {
        config.validate().expect("invalid EvolveConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // 1. Initial population of uniformly random tours
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::random(cities, &mut rng))
            .collect();
        for tour in &mut population {
            tour.evaluate_fitness();
        }
        // Required when the wheel is active; harmless for tournament.
        evaluate_chances(&mut population);

        // 2. Seed best-ever with a deep copy, never an alias into the
        //    population that mutation will keep rewriting.
        let mut best_ever = population[0].clone();
        let mut distance_history = Vec::with_capacity(config.generations);
        let mut fitness_history = Vec::with_capacity(config.generations);

        // 3. Generational loop
        for _ in 0..config.generations {
            let mut next_gen = Vec::with_capacity(config.population_size);
            for _ in 0..config.population_size {
                let parent1 = config.selection.select(&population, &mut rng);
                let parent2 = config.selection.select(&population, &mut rng);
                next_gen.push(crossover(parent1, parent2, &mut rng));
            }

            mutate(&mut next_gen, config.mutation_rate, &mut rng);

            population = next_gen;
            for tour in &mut population {
                tour.evaluate_fitness();
            }
            evaluate_chances(&mut population);

            let gen_best = generation_best(&population);
            distance_history.push(gen_best.length());
            fitness_history.push(gen_best.fitness);
            if gen_best.fitness > best_ever.fitness {
                best_ever = gen_best.clone();
            }
        }

        EvolveResult {
            best_length: best_ever.length(),
            best: best_ever,
            generations: config.generations,
            distance_history,
            fitness_history,
        }
    }
}

/// The fittest tour of a generation; ties go to the first-seen tour.
fn generation_best(population: &[Tour]) -> &Tour {
    let mut best = &population[0];
    for tour in &population[1..] {
        if tour.fitness > best.fitness {
            best = tour;
        }
    }
    best
}
