//! Breeding and mutation operators for identity-keyed orderings.
//!
//! Both operators work in place and only move positions, so an ordering
//! stays a permutation of its candidate set.
//!
//! - [`breed`]: Single-point repair of a child toward a parent — O(n)
//! - [`mutate`]: Exchange two random positions — O(1)

use crate::item::OptimizationItem;
use rand::Rng;

/// Repairs the first divergence of `child` from `parent`.
///
/// Walks both orderings in lockstep. At the first position `i` whose
/// identities differ, the item in `child` carrying `parent[i]`'s identity
/// is swapped into position `i`. Only that one divergence is fixed; the
/// rest of `child` is left as is.
///
/// No-op when either ordering has fewer than 2 items, when the orderings
/// already agree position by position, or when `parent[i]`'s identity is
/// absent from `child`.
///
/// # Complexity
/// O(n)
pub fn breed<T: OptimizationItem>(parent: &[T], child: &mut [T]) {
    if parent.len() < 2 || child.len() < 2 {
        return;
    }

    let Some(i) = parent
        .iter()
        .zip(child.iter())
        .position(|(p, c)| p.unique_id() != c.unique_id())
    else {
        return;
    };

    let child_id = child[i].unique_id();
    let parent_id = parent[i].unique_id();
    let from = child.iter().position(|c| c.unique_id() == child_id);
    let to = child.iter().position(|c| c.unique_id() == parent_id);

    if let (Some(from), Some(to)) = (from, to) {
        child.swap(from, to);
    }
}

/// Swap mutation: exchange two random positions.
///
/// Draws nothing for orderings shorter than 2. Otherwise draws two
/// positions independently; coinciding positions leave the ordering
/// unchanged.
///
/// # Complexity
/// O(1)
pub fn mutate<T, R: Rng>(ordering: &mut [T], rng: &mut R) {
    let n = ordering.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    if i != j {
        ordering.swap(i, j);
    }
}
