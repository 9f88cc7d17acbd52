//! Permutation-space sizing.
//!
//! The optimizers report `n!` as the size of the candidate's search space,
//! and the genetic search caps its population with it.

use crate::error::{Error, Result};

/// Computes `P(n, r) = n! / (n - r)!`.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] unless
/// `object_count >= sample_count >= 0`.
///
/// # Precision
/// Accumulates in `f64`: exact through `22!`, rounded beyond that, and
/// `f64::INFINITY` from `171!` upward. Values never wrap.
///
/// ```
/// use u_ordering::permutations;
///
/// assert_eq!(permutations(4, 4).unwrap(), 24.0);
/// assert_eq!(permutations(5, 2).unwrap(), 20.0);
/// assert!(permutations(2, 3).is_err());
/// ```
pub fn permutations(object_count: i64, sample_count: i64) -> Result<f64> {
    if object_count < sample_count || sample_count < 0 {
        return Err(Error::InvalidArgument(format!(
            "permutations requires object_count >= sample_count >= 0, got ({object_count}, {sample_count})"
        )));
    }
    let n = object_count as u64;
    let r = sample_count as u64;

    Ok(factorial(n) / factorial(n - r))
}

/// Computes `n!` as a floating-point value.
pub fn factorial(n: u64) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Permutation-space size of a candidate set with `len` items.
pub(crate) fn space_size(len: usize) -> f64 {
    factorial(len as u64)
}
