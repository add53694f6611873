//! The matched subsequence returned by a successful search.
//!
//! A `Pick` pairs the chosen values with their absolute positions in the
//! searched queue. Only the search builds picks, so every `Pick` a caller
//! holds satisfies the invariants below.

/// A subsequence of the queue whose values sum exactly to the target.
///
/// Invariants:
/// - `values().len() == indices().len()`
/// - `indices()` is strictly increasing and avoids every reserved position
/// - `values()[k] == queue[indices()[k]]`
/// - every prefix sum of `values()` is `<= target`, the full sum `== target`
///
/// Fields are private; a pick cannot be assembled by hand:
/// ```compile_fail
/// let _ = subseq_sum::Pick { values: vec![99], indices: vec![0, 0, 7] };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    values: Vec<i64>,
    indices: Vec<usize>,
}

impl Pick {
    pub(crate) fn new(values: Vec<i64>, indices: Vec<usize>) -> Self {
        debug_assert_eq!(values.len(), indices.len());
        Self { values, indices }
    }

    /// Chosen weights in queue order.
    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Absolute zero-based queue positions of [`values`](Self::values).
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of chosen elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing was chosen. A pick produced by the search is
    /// never empty because the target is positive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the chosen values.
    pub fn sum(&self) -> i64 {
        self.values.iter().sum()
    }

    pub fn into_values(self) -> Vec<i64> {
        self.values
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}
