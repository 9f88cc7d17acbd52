//! Genetic search over orderings.
//!
//! Evolves a population of shuffled clones of the candidate set. Each
//! generation walks disjoint adjacent pairs and either breeds the first
//! member into the second or mutates the second, then rescores and sorts
//! the whole population. The best member after the last generation is the
//! result.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: Population cap, generation count, mutation probability, seed
//! - [`GeneticRunner`]: Executes the evolutionary loop
//! - [`ScoredOrdering`]: A population member and its last computed cost
//!
//! # Submodules
//!
//! - [`operators`]: Single-point breeding repair and swap mutation

mod config;
pub mod operators;
mod runner;
mod types;

pub use config::GeneticConfig;
pub use runner::GeneticRunner;
pub use types::{ScoredOrdering, UNSCORED};
