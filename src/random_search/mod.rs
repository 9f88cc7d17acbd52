//! Random search.
//!
//! Samples a fixed number of perturbed clones of the candidate set and
//! keeps the cheapest. Useful on its own for small candidate sets and as a
//! baseline for the [genetic search](crate::genetic).
//!
//! # Key Types
//!
//! - [`RandomSearchConfig`]: Iteration count and seed
//! - [`RandomSearchRunner`]: Executes the sampling loop

mod config;
mod runner;

pub use config::RandomSearchConfig;
pub use runner::RandomSearchRunner;
