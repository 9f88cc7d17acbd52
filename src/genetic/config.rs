//! Genetic search configuration.
//!
//! [`GeneticConfig`] holds the parameters of the evolutionary loop.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the genetic search.
///
/// # Defaults
///
/// ```
/// use u_ordering::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.max_population, 120);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_ordering::genetic::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_generations(200)
///     .with_mutation_probability(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneticConfig {
    /// Upper bound on the population size.
    ///
    /// The actual size is `min(n!, max_population)` for `n` candidates, so
    /// tiny candidate sets never hold more members than distinct orderings.
    pub max_population: usize,

    /// Number of evolve-and-resort passes.
    pub generations: usize,

    /// Probability that a pair mutates its second member instead of breeding
    /// the first member into it (0.0–1.0).
    pub mutation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            max_population: 120,
            generations: 500,
            mutation_probability: 0.2,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the population cap.
    pub fn with_max_population(mut self, n: usize) -> Self {
        self.max_population = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population size for a candidate set of `candidate_count` items.
    pub fn population_size(&self, candidate_count: usize) -> usize {
        let space = crate::permutation::space_size(candidate_count);
        if space >= self.max_population as f64 {
            self.max_population
        } else {
            space as usize
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`] describing the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.max_population == 0 {
            return Err(Error::InvalidConfig(
                "max_population must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(Error::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(Error::InvalidConfig(
                "mutation_probability must be within 0.0..=1.0".into(),
            ));
        }
        Ok(())
    }
}
