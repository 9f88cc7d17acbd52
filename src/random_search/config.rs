//! Random search configuration.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the random search.
///
/// # Examples
///
/// ```
/// use u_ordering::random_search::RandomSearchConfig;
///
/// let config = RandomSearchConfig::default()
///     .with_iterations(250)
///     .with_seed(7);
/// assert_eq!(config.iterations, 250);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RandomSearchConfig {
    /// Number of shuffled orderings to sample and score. Must be at least 1.
    pub iterations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            seed: None,
        }
    }
}

impl RandomSearchConfig {
    /// Sets the number of sampled orderings.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] when `iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidArgument(
                "iterations must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
