//! Contracts between the optimizers and caller-defined data.
//!
//! - [`OptimizationItem`]: what a candidate element must support
//! - [`CostFunction`]: how an ordering is scored

use crate::error::{Error, Result};

/// A candidate element that can be placed in an ordering.
///
/// Items must be independently duplicable ([`Clone`] producing a
/// deep-equal copy, including the identity) and carry an identity that is
/// unique within one candidate set. The optimizers only ever reorder
/// clones; item fields are never touched.
///
/// # Implementing
///
/// ```
/// use u_ordering::OptimizationItem;
///
/// #[derive(Clone)]
/// struct Task {
///     id: i64,
///     hours: i64,
/// }
///
/// impl OptimizationItem for Task {
///     fn unique_id(&self) -> i64 {
///         self.id
///     }
/// }
/// ```
pub trait OptimizationItem: Clone {
    /// Returns the identity of this item within its candidate set.
    fn unique_id(&self) -> i64;
}

/// Scores an ordering. Lower is better.
///
/// Implemented for every `Fn(&[T]) -> i64`, so closures can be passed
/// directly. Implementations are expected to be deterministic and free of
/// side effects; they are called once per sampled ordering by the random
/// search and once per population member per generation by the genetic
/// search.
pub trait CostFunction<T> {
    /// Returns the cost of `ordering`.
    fn cost(&self, ordering: &[T]) -> i64;
}

impl<T, F> CostFunction<T> for F
where
    F: Fn(&[T]) -> i64,
{
    fn cost(&self, ordering: &[T]) -> i64 {
        self(ordering)
    }
}

/// Rejects an empty candidate set.
pub(crate) fn validate_candidates<T>(candidates: &[T]) -> Result<()> {
    if candidates.is_empty() {
        return Err(Error::InvalidArgument(
            "candidates cannot be empty".into(),
        ));
    }
    Ok(())
}
