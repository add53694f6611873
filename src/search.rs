//! Depth-first, first-match backtracking search over an index-ordered queue.
//!
//! The search explores extensions of the current path left to right: at each
//! level it tries to extend with position `i` before skipping `queue[i]` in
//! favour of `i + 1`. The first path whose sum hits the target is returned and
//! no alternative is explored afterwards.
//!
//! Instead of recursing once per chosen element, the search keeps a trail of
//! chosen positions. Extending pushes onto the trail and descends to the next
//! position; exhausting a level pops the last position `p` and resumes its
//! parent level at `p + 1`. This visits candidates in exactly the order of the
//! recursive formulation while using constant call-stack depth.

use crate::feasibility::fits;
use crate::pick::Pick;

/// Run the search on a validated instance.
///
/// Requirements (checked by [`Finder`](crate::finder::Finder)):
/// - `target > 0` and every weight in `queue` is positive,
/// - `reserved` is a mask over `queue` (`reserved[i]` excludes position `i`);
///   positions past the end of the mask are treated as free.
pub(crate) fn search(queue: &[i64], target: i64, reserved: &[bool]) -> Option<Pick> {
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("pick_search", len = queue.len(), capacity = target);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut values: Vec<i64> = Vec::new();
    let mut indices: Vec<usize> = Vec::new();
    let mut sum = 0i64;
    let mut cursor = 0usize;

    loop {
        let Some(&weight) = queue.get(cursor) else {
            // Level exhausted: drop the last choice and skip past it.
            let (Some(last), Some(value)) = (indices.pop(), values.pop()) else {
                #[cfg(feature = "tracing")]
                tracing::trace!("search exhausted");
                return None;
            };
            sum -= value;
            cursor = last + 1;
            #[cfg(feature = "tracing")]
            tracing::trace!(depth = indices.len(), resume = cursor, "backtrack");
            continue;
        };

        let idx = cursor;
        cursor += 1;

        if reserved.get(idx).copied().unwrap_or(false) {
            continue;
        }
        if !fits(target, sum, weight) {
            continue;
        }

        values.push(weight);
        indices.push(idx);
        sum += weight;

        if sum == target {
            #[cfg(feature = "tracing")]
            tracing::trace!(?indices, "match");
            return Some(Pick::new(values, indices));
        }
        // Descend: the next level starts right after `idx`, which `cursor`
        // already points at.
    }
}

#[cfg(test)]
mod tests {
    use super::search;
    use crate::pick::Pick;

    fn run(queue: &[i64], target: i64, reserved: &[usize]) -> Option<(Vec<i64>, Vec<usize>)> {
        let mut mask = vec![false; queue.len()];
        for &r in reserved {
            if r < mask.len() {
                mask[r] = true;
            }
        }
        search(queue, target, &mask).map(|p| (p.values().to_vec(), p.indices().to_vec()))
    }

    #[test]
    fn extends_earliest_prefix_first() {
        assert_eq!(
            run(&[1, 1, 2, 1, 1, 5], 5, &[]),
            Some((vec![1, 1, 2, 1], vec![0, 1, 2, 3]))
        );
    }

    #[test]
    fn skips_overshooting_elements() {
        assert_eq!(run(&[3, 1, 2, 5, 5], 5, &[]), Some((vec![3, 2], vec![0, 2])));
        assert_eq!(run(&[4, 4, 1, 4], 5, &[]), Some((vec![4, 1], vec![0, 2])));
    }

    #[test]
    fn backtracks_out_of_dead_prefix() {
        // [1, 1, 3] fills immediately; [1, 3, ...] needs the 4 after dropping 3.
        assert_eq!(run(&[1, 1, 3, 2, 4], 5, &[]).map(|r| r.0), Some(vec![1, 1, 3]));
        assert_eq!(run(&[1, 3, 2, 4], 5, &[]).map(|r| r.0), Some(vec![1, 4]));
        assert_eq!(run(&[3, 4, 5, 4, 1], 5, &[]).map(|r| r.0), Some(vec![4, 1]));
    }

    #[test]
    fn no_solution() {
        assert_eq!(run(&[4, 4], 5, &[]), None);
        assert_eq!(run(&[], 5, &[]), None);
    }

    #[test]
    fn reserved_positions_are_skipped() {
        assert_eq!(run(&[5], 5, &[0]), None);
        assert_eq!(run(&[3, 3, 1, 2], 5, &[0]).map(|r| r.1), Some(vec![1, 3]));
        assert_eq!(run(&[4, 3, 3, 2], 5, &[1]).map(|r| r.1), Some(vec![2, 3]));
    }

    #[test]
    fn short_mask_treats_tail_as_free() {
        assert_eq!(search(&[2, 3], 5, &[]).map(Pick::into_indices), Some(vec![0, 1]));
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let queue = vec![1i64; 200_000];
        let pick = search(&queue, 200_000, &[]).unwrap();
        assert_eq!(pick.len(), 200_000);
        assert_eq!(pick.indices().last(), Some(&199_999));
    }
}
