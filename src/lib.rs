//! Domain-agnostic ordering optimizer.
//!
//! Given a set of uniquely identified items and a cost function over an
//! ordering of that set, searches for a low-cost ordering:
//!
//! - **Random search**: scores a fixed number of randomly perturbed clones
//!   and keeps the cheapest.
//! - **Genetic search**: evolves a population of orderings with pairwise
//!   breeding and swap mutation, resorting by cost every generation.
//!
//! Both searches share one perturbation primitive ([`swap_shuffle`]), draw
//! every random number from a single generator per invocation, and return
//! an [`OptimizationResult`].
//!
//! # Example
//!
//! ```
//! use u_ordering::{genetic_search, random_search, OptimizationItem};
//!
//! #[derive(Clone)]
//! struct Task {
//!     id: i64,
//!     hours: i64,
//! }
//!
//! impl OptimizationItem for Task {
//!     fn unique_id(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! let tasks: Vec<Task> = [3, 1, 2]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &hours)| Task { id: i as i64 + 1, hours })
//!     .collect();
//! let cost = |o: &[Task]| o.iter().enumerate().map(|(i, t)| i as i64 * t.hours).sum::<i64>();
//!
//! let sampled = random_search(&tasks, &cost, 25).unwrap();
//! let evolved = genetic_search(&tasks, &cost).unwrap();
//! assert_eq!(sampled.permutation_space_size, 6.0);
//! assert!(evolved.best_cost <= cost(&tasks[..]));
//! ```
//!
//! No search guarantees a global optimum; neither runs in parallel.

pub mod error;
pub mod genetic;
pub mod item;
pub mod permutation;
pub mod random;
pub mod random_search;
pub mod result;

pub use error::{Error, Result};
pub use item::{CostFunction, OptimizationItem};
pub use permutation::permutations;
pub use random::{create_rng, swap_shuffle};
pub use result::OptimizationResult;

use genetic::{GeneticConfig, GeneticRunner};
use random_search::{RandomSearchConfig, RandomSearchRunner};

/// Scores `iterations` shuffled clones of `candidates` and returns the
/// cheapest.
///
/// # Errors
/// [`Error::InvalidArgument`] if `candidates` is empty or `iterations` is
/// zero.
pub fn random_search<T, C>(
    candidates: &[T],
    cost_fn: &C,
    iterations: usize,
) -> Result<OptimizationResult<T>>
where
    T: OptimizationItem,
    C: CostFunction<T> + ?Sized,
{
    let config = RandomSearchConfig::default().with_iterations(iterations);
    RandomSearchRunner::run(candidates, cost_fn, &config)
}

/// Runs the genetic search with the default configuration
/// (population `min(n!, 120)`, 500 generations, mutation probability 0.2).
///
/// # Errors
/// [`Error::InvalidArgument`] if `candidates` is empty.
pub fn genetic_search<T, C>(candidates: &[T], cost_fn: &C) -> Result<OptimizationResult<T>>
where
    T: OptimizationItem,
    C: CostFunction<T> + ?Sized,
{
    GeneticRunner::run(candidates, cost_fn, &GeneticConfig::default())
}
