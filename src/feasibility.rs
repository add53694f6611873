//! Arithmetic feasibility check for partial paths.
//!
//! A partial path can still grow into an exact match only if none of its
//! values exceeds the target and its running sum has not overshot it. The
//! check replaces a lookup into a precomputed tree of all compositions of
//! the target: for positive values, a path is a prefix of some composition
//! exactly when it passes [`feasible`].

/// Returns `true` iff every value in `path` is `<= target` and the sum of
/// `path` is `<= target`.
///
/// Preconditions (not checked): `target > 0` and every value is positive.
pub fn feasible(target: i64, path: &[i64]) -> bool {
    let mut remaining = target;
    for &value in path {
        if value > target || value > remaining {
            return false;
        }
        remaining -= value;
    }
    true
}

/// Incremental form of [`feasible`] used by the search loop.
///
/// If a prefix with sum `sum` is feasible, then extending it with `weight`
/// is feasible iff `fits(target, sum, weight)`. Never overflows.
#[inline]
pub fn fits(target: i64, sum: i64, weight: i64) -> bool {
    debug_assert!(sum <= target);
    weight <= target - sum
}
