//! Population member representation.

/// Cost assigned to a member that has not been scored yet.
pub const UNSCORED: i64 = i64::MAX;

/// One population member: an ordering together with its last computed cost.
///
/// The cost is only meaningful right after a scoring pass; breeding and
/// mutation change the ordering without touching it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredOrdering<T> {
    /// Cost from the most recent scoring pass, or [`UNSCORED`].
    pub cost: i64,

    /// Candidate ordering.
    pub ordering: Vec<T>,
}

impl<T> ScoredOrdering<T> {
    /// Wraps an ordering that has not been scored yet.
    pub fn unscored(ordering: Vec<T>) -> Self {
        Self {
            cost: UNSCORED,
            ordering,
        }
    }
}
