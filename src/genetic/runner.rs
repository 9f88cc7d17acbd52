//! Genetic search evolutionary loop.
//!
//! [`GeneticRunner`] orchestrates the complete process:
//! initialization → scoring → (pairwise breed/mutate → rescore → sort) × generations.

use super::config::GeneticConfig;
use super::operators::{breed, mutate};
use super::types::ScoredOrdering;
use crate::error::{Error, Result};
use crate::item::{validate_candidates, CostFunction, OptimizationItem};
use crate::permutation::space_size;
use crate::random::{rng_from_seed, swap_shuffle};
use crate::result::OptimizationResult;
use rand::Rng;
use std::time::Instant;

/// Executes the genetic search.
///
/// # Usage
///
/// ```ignore
/// let config = GeneticConfig::default().with_seed(42);
/// let result = GeneticRunner::run(&tasks, &cost, &config)?;
/// println!("best cost: {}", result.best_cost);
/// ```
pub struct GeneticRunner;

impl GeneticRunner {
    /// Runs the genetic search with a generator built from `config.seed`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `candidates` is empty,
    /// [`Error::InvalidConfig`] if `config` fails validation.
    pub fn run<T, C>(
        candidates: &[T],
        cost_fn: &C,
        config: &GeneticConfig,
    ) -> Result<OptimizationResult<T>>
    where
        T: OptimizationItem,
        C: CostFunction<T> + ?Sized,
    {
        validate_candidates(candidates)?;
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(candidates, cost_fn, config, &mut rng)
    }

    /// Runs the genetic search drawing from a caller-owned generator.
    ///
    /// `config.seed` is ignored; every draw of the run (initial shuffles,
    /// breed/mutate decisions, mutation positions) comes from `rng`.
    pub fn run_with_rng<T, C, R>(
        candidates: &[T],
        cost_fn: &C,
        config: &GeneticConfig,
        rng: &mut R,
    ) -> Result<OptimizationResult<T>>
    where
        T: OptimizationItem,
        C: CostFunction<T> + ?Sized,
        R: Rng,
    {
        validate_candidates(candidates)?;
        config.validate()?;

        let start = Instant::now();
        let population_size = config.population_size(candidates.len());
        log::debug!(
            "Genetic search: {} candidates, population {}, {} generations",
            candidates.len(),
            population_size,
            config.generations
        );

        // 1. Initialize and score
        let mut population = initialize_population(candidates, population_size, rng);
        score_and_sort(&mut population, cost_fn);
        log::trace!("Initial population best cost {}", population[0].cost);

        // 2. Evolve
        for gen in 0..config.generations {
            evolve(&mut population, config.mutation_probability, rng);
            score_and_sort(&mut population, cost_fn);
            log::trace!("Generation {}: best cost {}", gen + 1, population[0].cost);
        }

        // 3. Final ranking
        score_and_sort(&mut population, cost_fn);
        let best = population
            .into_iter()
            .next()
            .ok_or_else(|| Error::InvalidConfig("population must not be empty".into()))?;

        let elapsed = start.elapsed();
        log::debug!(
            "Genetic search finished: best cost {} in {:?}",
            best.cost,
            elapsed
        );

        Ok(OptimizationResult {
            best_ordering: best.ordering,
            best_cost: best.cost,
            elapsed,
            permutation_space_size: space_size(candidates.len()),
        })
    }
}

/// Builds `size` unscored members, each a shuffled clone of `candidates`.
fn initialize_population<T, R>(candidates: &[T], size: usize, rng: &mut R) -> Vec<ScoredOrdering<T>>
where
    T: OptimizationItem,
    R: Rng,
{
    (0..size)
        .map(|_| {
            let mut ordering = candidates.to_vec();
            swap_shuffle(&mut ordering, rng);
            ScoredOrdering::unscored(ordering)
        })
        .collect()
}

/// Applies one generation of operators to disjoint adjacent pairs.
///
/// Pairs are `(0, 1), (2, 3), …`; a trailing odd member sits out. For each
/// pair one draw decides: above `mutation_probability` the first member is
/// bred into the second, otherwise the second is mutated. The first member
/// of a pair is never modified.
fn evolve<T, R>(population: &mut [ScoredOrdering<T>], mutation_probability: f64, rng: &mut R)
where
    T: OptimizationItem,
    R: Rng,
{
    for pair in population.chunks_exact_mut(2) {
        let (parent, child) = pair.split_at_mut(1);
        if rng.random::<f64>() > mutation_probability {
            breed(&parent[0].ordering, &mut child[0].ordering);
        } else {
            mutate(&mut child[0].ordering, rng);
        }
    }
}

/// Rescores every member and stable-sorts ascending by cost.
fn score_and_sort<T, C>(population: &mut [ScoredOrdering<T>], cost_fn: &C)
where
    C: CostFunction<T> + ?Sized,
{
    for member in population.iter_mut() {
        member.cost = cost_fn.cost(&member.ordering);
    }
    population.sort_by_key(|member| member.cost);
}

// ============================================================================
// Tests
// ============================================================================
