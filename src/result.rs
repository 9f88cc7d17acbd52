//! Optimization result representation.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a random or genetic search run.
///
/// Created once at the end of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptimizationResult<T> {
    /// The lowest-cost ordering found.
    pub best_ordering: Vec<T>,

    /// Cost of [`best_ordering`](Self::best_ordering).
    pub best_cost: i64,

    /// Wall-clock time of the whole run, validation excluded.
    pub elapsed: Duration,

    /// Number of distinct orderings of the candidate set (`n!`).
    pub permutation_space_size: f64,
}

impl<T> OptimizationResult<T> {
    /// Number of items in the best ordering.
    pub fn len(&self) -> usize {
        self.best_ordering.len()
    }

    /// Returns `true` if the best ordering holds no items.
    pub fn is_empty(&self) -> bool {
        self.best_ordering.is_empty()
    }

    /// Elapsed wall-clock time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}
