//! An owning queue that hands out disjoint groups.
//!
//! [`PickQueue`] keeps weights in arrival order with a priority section at
//! the front. Taking groups removes their weights from the queue, so later
//! takes only see what is left.

use crate::carve::carve_groups;
use crate::error::{check_queue, check_target, Result};
use crate::reserved::Reserved;

/// Weights waiting to be grouped, priority entries first.
///
/// ```
/// use subseq_sum::PickQueue;
///
/// let mut queue = PickQueue::new();
/// queue.push(1).unwrap();
/// queue.push_priority(2).unwrap();
/// queue.push_priority(3).unwrap();
/// assert_eq!(queue.as_slice(), &[2, 3, 1]);
///
/// assert_eq!(queue.take(&[5]).unwrap(), Some(vec![vec![2, 3]]));
/// assert_eq!(queue.as_slice(), &[1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickQueue {
    weights: Vec<i64>,
    // weights[..priority_len] is the priority section
    priority_len: usize,
}

impl PickQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `weight` behind everything already queued.
    pub fn push(&mut self, weight: i64) -> Result<()> {
        check_queue(&[weight])?;
        self.weights.push(weight);
        Ok(())
    }

    /// Queue `weight` behind earlier priority entries but ahead of every
    /// ordinary one.
    pub fn push_priority(&mut self, weight: i64) -> Result<()> {
        check_queue(&[weight])?;
        self.weights.insert(self.priority_len, weight);
        self.priority_len += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of entries in the priority section.
    pub fn priority_len(&self) -> usize {
        self.priority_len
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.weights
    }

    /// Sum of all queued weights, saturating.
    pub fn total(&self) -> i64 {
        self.weights.iter().fold(0i64, |acc, &w| acc.saturating_add(w))
    }

    /// Form one group per entry of `targets` and remove their weights.
    ///
    /// Returns the values of each group, in `targets` order. On `Ok(None)`
    /// the queue is left untouched: either the queued total is below the sum
    /// of the targets, or some target cannot be filled.
    ///
    /// # Errors
    /// [`PickError::NonPositiveTarget`](crate::PickError::NonPositiveTarget)
    /// for any target `<= 0`, checked before anything else.
    pub fn take(&mut self, targets: &[i64]) -> Result<Option<Vec<Vec<i64>>>> {
        for &target in targets {
            check_target(target)?;
        }
        let required = targets.iter().fold(0i64, |acc, &t| acc.saturating_add(t));
        if self.total() < required {
            #[cfg(feature = "tracing")]
            tracing::debug!(total = self.total(), required, "not enough weight queued");
            return Ok(None);
        }

        let Some(picks) = carve_groups(&self.weights, targets, &Reserved::new())? else {
            return Ok(None);
        };

        let mut taken: Vec<usize> = picks.iter().flat_map(|p| p.indices()).copied().collect();
        taken.sort_unstable();
        for &index in taken.iter().rev() {
            self.weights.remove(index);
            if index < self.priority_len {
                self.priority_len -= 1;
            }
        }

        Ok(Some(picks.into_iter().map(|p| p.into_values()).collect()))
    }
}
