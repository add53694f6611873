//! First-match subsequence sums.
//!
//! This crate finds, inside an ordered queue of positive weights, the first
//! order-preserving subsequence whose values add up exactly to a target
//! capacity. Positions can be reserved in advance so that a caller can carve
//! several disjoint groups out of the same queue, e.g. filling teams of five
//! from a queue of party sizes.
//!
//! ## How the answer is chosen
//! The search is depth-first and scans the queue left to right. It always
//! tries to extend the current path with the earliest usable element before
//! considering skipping it, and stops at the first exact match. The answer is
//! therefore deterministic, but neither the shortest nor in any sense optimal.
//!
//! Partial paths are pruned with a purely arithmetic test
//! ([`feasibility::feasible`]): a path survives while no value exceeds the
//! target and its sum has not overshot it.
//!
//! ## Quick start
//! ```
//! use subseq_sum::{find_subsequence_sum, find_subsequence_sum_indices, Reserved};
//!
//! let queue = [1, 1, 2, 1, 1, 5];
//! let none = Reserved::new();
//! assert_eq!(find_subsequence_sum(&queue, 5, &none), Ok(Some(vec![1, 1, 2, 1])));
//! assert_eq!(find_subsequence_sum_indices(&queue, 5, &none), Ok(Some(vec![0, 1, 2, 3])));
//!
//! // Reserving the positions of the first match finds the next one.
//! let taken = Reserved::from([0, 1, 2, 3]);
//! assert_eq!(find_subsequence_sum_indices(&queue, 5, &taken), Ok(Some(vec![5])));
//! ```
//!
//! ## Entry points
//! - [`find_subsequence_sum`] / [`find_subsequence_sum_indices`] / [`find_pick`]
//!   for one-off searches.
//! - [`Finder`] and [`FinderBuilder`] for a validated, reusable instance.
//! - [`carve_groups`] and [`carve_all`] for several disjoint picks.
//! - [`PickQueue`] for an owning queue with a priority section that removes
//!   the weights of every group it hands out.
//!
//! Non-positive targets and weights are rejected with [`PickError`]; "no
//! solution" is `Ok(None)`.

pub mod builder;
pub mod carve;
pub mod error;
pub mod feasibility;
pub mod finder;
pub mod pick;
pub mod queue;
pub mod reserved;
mod search;

pub use crate::builder::FinderBuilder;
pub use crate::carve::{carve_all, carve_groups, Carver};
pub use crate::error::{PickError, Result};
pub use crate::finder::{find_pick, find_subsequence_sum, find_subsequence_sum_indices, Finder};
pub use crate::pick::Pick;
pub use crate::queue::PickQueue;
pub use crate::reserved::Reserved;

/// Target capacity used when none is given.
pub const DEFAULT_TARGET: i64 = 5;
