//! Positions excluded from selection.
//!
//! Reserved positions are absolute indices into the original queue, usually
//! the positions consumed by earlier picks. Indices past the end of the queue
//! are accepted and simply never match.

use std::collections::BTreeSet;

use crate::pick::Pick;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reserved {
    positions: BTreeSet<usize>,
}

impl Reserved {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `index`. Returns false if it was already reserved.
    pub fn insert(&mut self, index: usize) -> bool {
        self.positions.insert(index)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.positions.contains(&index)
    }

    /// Reserve every position taken by `pick`.
    pub fn extend_from_pick(&mut self, pick: &Pick) {
        self.positions.extend(pick.indices().iter().copied());
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_superset(&self, other: &Reserved) -> bool {
        self.positions.is_superset(&other.positions)
    }

    /// Reserved positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Dense lookup mask over `0..len`; out-of-range positions are dropped.
    pub(crate) fn mask(&self, len: usize) -> Vec<bool> {
        let mut mask = vec![false; len];
        for index in self.positions.range(..len) {
            mask[*index] = true;
        }
        mask
    }
}

impl FromIterator<usize> for Reserved {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Extend<usize> for Reserved {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

impl<const N: usize> From<[usize; N]> for Reserved {
    fn from(positions: [usize; N]) -> Self {
        positions.into_iter().collect()
    }
}
