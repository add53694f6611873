//! Carving disjoint groups out of one queue.
//!
//! Each group is found by the ordinary first-match search with every position
//! taken by earlier groups reserved. Groups are filled greedily in order; a
//! later group that cannot be filled never causes an earlier one to be
//! reconsidered.

use crate::error::{check_queue, check_target, Result};
use crate::pick::Pick;
use crate::reserved::Reserved;
use crate::search::search;

/// Fill one group per entry of `targets`, in order, from disjoint positions.
///
/// Returns `Ok(None)` as soon as a target cannot be filled; partial results
/// are discarded. All inputs are validated before the first search.
///
/// ```
/// use subseq_sum::{carve_groups, Reserved};
///
/// // Party sizes waiting in a queue, two teams of five.
/// let queue = [2, 3, 4, 1, 2, 3];
/// let teams = carve_groups(&queue, &[5, 5], &Reserved::new()).unwrap().unwrap();
/// assert_eq!(teams[0].indices(), vec![0, 1]);
/// assert_eq!(teams[1].indices(), vec![2, 3]);
/// ```
pub fn carve_groups(
    queue: &[i64],
    targets: &[i64],
    reserved: &Reserved,
) -> Result<Option<Vec<Pick>>> {
    check_queue(queue)?;
    for &target in targets {
        check_target(target)?;
    }

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("carve_groups", len = queue.len(), groups = targets.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut mask = reserved.mask(queue.len());
    let mut picks = Vec::with_capacity(targets.len());
    for &target in targets {
        let Some(pick) = search(queue, target, &mask) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(capacity = target, filled = picks.len(), "group cannot be filled");
            return Ok(None);
        };
        take(&mut mask, &pick);
        picks.push(pick);
    }
    Ok(Some(picks))
}

/// Iterator over successive disjoint picks of a single target.
///
/// Created by [`carve_all`] or [`Carver::with_reserved`].
#[derive(Debug, Clone)]
pub struct Carver<'q> {
    queue: &'q [i64],
    target: i64,
    mask: Vec<bool>,
    done: bool,
}

/// Repeatedly pick from `queue` until no further group of `target` exists.
///
/// ```
/// use subseq_sum::carve_all;
///
/// let groups: Vec<_> = carve_all(&[1, 4, 2, 3, 5, 4], 5).unwrap().collect();
/// let indices: Vec<_> = groups.iter().map(|g| g.indices().to_vec()).collect();
/// assert_eq!(indices, vec![vec![0, 1], vec![2, 3], vec![4]]);
/// ```
pub fn carve_all(queue: &[i64], target: i64) -> Result<Carver<'_>> {
    Carver::with_reserved(queue, target, &Reserved::new())
}

impl<'q> Carver<'q> {
    pub fn with_reserved(queue: &'q [i64], target: i64, reserved: &Reserved) -> Result<Self> {
        check_target(target)?;
        check_queue(queue)?;
        Ok(Self {
            queue,
            target,
            mask: reserved.mask(queue.len()),
            done: false,
        })
    }

    /// Positions not yet taken or reserved.
    pub fn remaining(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, &taken)| !taken)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Iterator for Carver<'_> {
    type Item = Pick;

    fn next(&mut self) -> Option<Pick> {
        if self.done {
            return None;
        }
        match search(self.queue, self.target, &self.mask) {
            Some(pick) => {
                take(&mut self.mask, &pick);
                #[cfg(feature = "tracing")]
                tracing::debug!(indices = ?pick.indices(), "carved group");
                Some(pick)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Carver<'_> {}

fn take(mask: &mut [bool], pick: &Pick) {
    for &i in pick.indices() {
        mask[i] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PickError;

    #[test]
    fn fills_groups_in_order() {
        let queue = [3, 3, 1, 2, 2];
        let picks = carve_groups(&queue, &[5, 5], &Reserved::new())
            .unwrap()
            .unwrap();
        assert_eq!(picks[0].indices(), vec![0, 3]);
        assert_eq!(picks[1].indices(), vec![1, 4]);
    }

    #[test]
    fn all_or_nothing() {
        let queue = [5, 4];
        assert_eq!(carve_groups(&queue, &[5, 5], &Reserved::new()), Ok(None));
        assert_eq!(carve_groups(&queue, &[], &Reserved::new()), Ok(Some(vec![])));
    }

    #[test]
    fn validates_every_target_first() {
        let queue = [5];
        assert_eq!(
            carve_groups(&queue, &[5, 0], &Reserved::new()),
            Err(PickError::NonPositiveTarget { target: 0 })
        );
    }

    #[test]
    fn honours_initial_reservations() {
        let queue = [5, 5, 5];
        let picks = carve_groups(&queue, &[5], &Reserved::from([0, 1]))
            .unwrap()
            .unwrap();
        assert_eq!(picks[0].indices(), vec![2]);
    }

    #[test]
    fn carver_stops_and_stays_stopped() {
        let queue = [2, 3, 4];
        let mut carver = carve_all(&queue, 5).unwrap();
        assert_eq!(carver.next().map(Pick::into_indices), Some(vec![0, 1]));
        assert_eq!(carver.remaining(), vec![2]);
        assert_eq!(carver.next(), None);
        assert_eq!(carver.next(), None);
    }
}
