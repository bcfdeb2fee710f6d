//! Genetic algorithm search for short closed tours over 2-D point sets
//! (the Traveling Salesman Problem).
//!
//! A population of candidate [`Tour`]s evolves over a fixed number of
//! generations: parents are chosen by a pluggable [`Selection`] strategy,
//! recombined by an order-preserving [`crossover`], and perturbed by
//! randomized [`mutate`] operators, while the best tour ever seen is
//! tracked separately from the churning population.
//!
//! # Key Types
//!
//! - [`Point`]: an immutable 2-D city coordinate
//! - [`Tour`]: a permutation of all cities with cached fitness
//! - [`Selection`]: fitness-proportionate wheel or binary tournament
//! - [`EvolveConfig`]: run parameters (population size, rates, seed)
//! - [`EvolveRunner`]: executes the generational loop
//! - [`EvolveResult`]: best-ever tour plus per-generation histories
//!
//! # Example
//!
//! ```
//! use tsp_evolve::{EvolveConfig, EvolveRunner, Point};
//!
//! let cities = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 3.0),
//!     Point::new(0.0, 3.0),
//! ];
//!
//! let config = EvolveConfig::default()
//!     .with_population_size(30)
//!     .with_generations(100)
//!     .with_seed(14);
//!
//! let result = EvolveRunner::run(&cities, &config);
//! println!("best tour length: {}", result.best_length);
//! ```
//!
//! # Scope
//!
//! The crate is the optimization engine only. Coordinate loading,
//! plotting, and the surrounding program live with the caller;
//! [`EvolveResult`] exposes the snapshots they need. Evaluation is
//! single-threaded and runs to completion — no parallelism, no early
//! stopping, one scalar fitness.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod crossover;
mod mutation;
mod point;
mod runner;
mod selection;
mod tour;

pub use config::EvolveConfig;
pub use crossover::crossover;
pub use mutation::mutate;
pub use point::Point;
pub use runner::{EvolveResult, EvolveRunner};
pub use selection::{evaluate_chances, Selection};
pub use tour::{Tour, FITNESS_SCALE};
