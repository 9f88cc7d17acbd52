//! Random search execution loop.

use super::config::RandomSearchConfig;
use crate::error::{Error, Result};
use crate::item::{validate_candidates, CostFunction, OptimizationItem};
use crate::permutation::space_size;
use crate::random::{rng_from_seed, swap_shuffle};
use crate::result::OptimizationResult;
use rand::Rng;
use std::time::Instant;

/// Executes the random search.
///
/// Each round clones the candidates, perturbs the clone with
/// [`swap_shuffle`], and scores it. The strictly lowest cost wins; on ties
/// the earlier ordering is kept.
///
/// # Usage
///
/// ```ignore
/// let config = RandomSearchConfig::default().with_iterations(50).with_seed(42);
/// let result = RandomSearchRunner::run(&tasks, &cost, &config)?;
/// println!("best cost: {}", result.best_cost);
/// ```
pub struct RandomSearchRunner;

impl RandomSearchRunner {
    /// Runs the random search with a generator built from `config.seed`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `candidates` is empty or
    /// `config.iterations` is zero. Nothing is cloned or drawn in that case.
    pub fn run<T, C>(
        candidates: &[T],
        cost_fn: &C,
        config: &RandomSearchConfig,
    ) -> Result<OptimizationResult<T>>
    where
        T: OptimizationItem,
        C: CostFunction<T> + ?Sized,
    {
        validate_candidates(candidates)?;
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(candidates, cost_fn, config.iterations, &mut rng)
    }

    /// Runs the random search drawing from a caller-owned generator.
    ///
    /// The generator is used for every shuffle of the run and nothing else.
    pub fn run_with_rng<T, C, R>(
        candidates: &[T],
        cost_fn: &C,
        iterations: usize,
        rng: &mut R,
    ) -> Result<OptimizationResult<T>>
    where
        T: OptimizationItem,
        C: CostFunction<T> + ?Sized,
        R: Rng,
    {
        validate_candidates(candidates)?;
        if iterations == 0 {
            return Err(Error::InvalidArgument(
                "iterations must be greater than zero".into(),
            ));
        }

        let start = Instant::now();
        log::debug!(
            "Random search: {} candidates, {} iterations",
            candidates.len(),
            iterations
        );

        let mut best: Option<(i64, Vec<T>)> = None;

        for round in 0..iterations {
            let mut ordering = candidates.to_vec();
            swap_shuffle(&mut ordering, rng);
            let cost = cost_fn.cost(&ordering);

            let improved = match &best {
                Some((best_cost, _)) => cost < *best_cost,
                None => true,
            };
            if improved {
                log::trace!("Random search round {}: new best cost {}", round, cost);
                best = Some((cost, ordering));
            }
        }

        // iterations >= 1, so the first round always filled `best`.
        let (best_cost, best_ordering) = best.ok_or_else(|| {
            Error::InvalidArgument("iterations must be greater than zero".into())
        })?;

        let elapsed = start.elapsed();
        log::debug!(
            "Random search finished: best cost {} in {:?}",
            best_cost,
            elapsed
        );

        Ok(OptimizationResult {
            best_ordering,
            best_cost,
            elapsed,
            permutation_space_size: space_size(candidates.len()),
        })
    }
}
