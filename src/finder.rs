//! Validated search instances.
//!
//! A [`Finder`] borrows a queue, checks the preconditions once, and can then
//! be run any number of times. Runs are pure: identical state yields an
//! identical result.

use crate::error::{check_queue, check_target, Result};
use crate::pick::Pick;
use crate::reserved::Reserved;
use crate::search::search;
use crate::DEFAULT_TARGET;

/// Subsequence-sum finder for a given queue.
///
/// Typical usage:
/// ```
/// use subseq_sum::{Finder, Reserved};
///
/// let queue = [3, 3, 1, 2];
/// let mut finder = Finder::new(&queue).unwrap();
/// assert_eq!(finder.run_indices(), Some(vec![0, 3]));
///
/// *finder.reserved_mut() = Reserved::from([0]);
/// assert_eq!(finder.run_indices(), Some(vec![1, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct Finder<'q> {
    queue: &'q [i64],
    target: i64,
    reserved: Reserved,
}

impl<'q> Finder<'q> {
    /// Create a finder with [`DEFAULT_TARGET`] and no reservations.
    pub fn new(queue: &'q [i64]) -> Result<Self> {
        Self::with_target(queue, DEFAULT_TARGET)
    }

    /// Create a finder with an explicit target.
    ///
    /// # Errors
    /// [`PickError::NonPositiveTarget`](crate::PickError::NonPositiveTarget) if
    /// `target <= 0`, [`PickError::NonPositiveWeight`](crate::PickError::NonPositiveWeight)
    /// if any queue element is `<= 0`.
    pub fn with_target(queue: &'q [i64], target: i64) -> Result<Self> {
        check_target(target)?;
        check_queue(queue)?;
        Ok(Self {
            queue,
            target,
            reserved: Reserved::new(),
        })
    }

    pub(crate) fn from_parts(queue: &'q [i64], target: i64, reserved: Reserved) -> Result<Self> {
        let mut finder = Self::with_target(queue, target)?;
        finder.reserved = reserved;
        Ok(finder)
    }

    pub fn queue(&self) -> &'q [i64] {
        self.queue
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn reserved(&self) -> &Reserved {
        &self.reserved
    }

    /// Mutable access to the reserved positions, e.g. to exclude the result
    /// of a previous run.
    pub fn reserved_mut(&mut self) -> &mut Reserved {
        &mut self.reserved
    }

    /// Run the search and return the first match, or `None` if no
    /// order-preserving, reservation-avoiding subsequence sums to the target.
    pub fn run(&self) -> Option<Pick> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "finder_run",
            len = self.queue.len(),
            capacity = self.target,
            reserved = self.reserved.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mask = self.reserved.mask(self.queue.len());
        let pick = search(self.queue, self.target, &mask);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            found = pick.is_some(),
            picked = pick.as_ref().map_or(0, Pick::len),
            "search finished"
        );

        pick
    }

    /// Values of the first match.
    pub fn run_values(&self) -> Option<Vec<i64>> {
        self.run().map(Pick::into_values)
    }

    /// Absolute positions of the first match.
    pub fn run_indices(&self) -> Option<Vec<usize>> {
        self.run().map(Pick::into_indices)
    }
}

/// First match of `target` in `queue` avoiding `reserved`, as values and
/// positions.
pub fn find_pick(queue: &[i64], target: i64, reserved: &Reserved) -> Result<Option<Pick>> {
    Ok(Finder::from_parts(queue, target, reserved.clone())?.run())
}

/// Values of the first order-preserving subsequence of `queue` that sums to
/// `target` without using any `reserved` position.
///
/// ```
/// use subseq_sum::{find_subsequence_sum, Reserved, DEFAULT_TARGET};
///
/// let values = find_subsequence_sum(&[3, 1, 2, 5, 5], DEFAULT_TARGET, &Reserved::new());
/// assert_eq!(values, Ok(Some(vec![3, 2])));
/// ```
pub fn find_subsequence_sum(
    queue: &[i64],
    target: i64,
    reserved: &Reserved,
) -> Result<Option<Vec<i64>>> {
    Ok(find_pick(queue, target, reserved)?.map(Pick::into_values))
}

/// Positions of the match returned by [`find_subsequence_sum`].
///
/// ```
/// use subseq_sum::{find_subsequence_sum_indices, Reserved};
///
/// let indices = find_subsequence_sum_indices(&[3, 3, 1, 2], 5, &Reserved::from([0]));
/// assert_eq!(indices, Ok(Some(vec![1, 3])));
/// ```
pub fn find_subsequence_sum_indices(
    queue: &[i64],
    target: i64,
    reserved: &Reserved,
) -> Result<Option<Vec<usize>>> {
    Ok(find_pick(queue, target, reserved)?.map(Pick::into_indices))
}
