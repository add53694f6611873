//! Error types for rejected search inputs.
//!
//! Only precondition violations are errors. A queue with no matching
//! subsequence is reported as `Ok(None)` by every entry point.

use thiserror::Error;

/// Precondition violation detected before any search runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// The target capacity was zero or negative.
    #[error("target capacity must be positive, got {target}")]
    NonPositiveTarget { target: i64 },

    /// A queue element was zero or negative. `index` is the first offender.
    #[error("weight at index {index} must be positive, got {value}")]
    NonPositiveWeight { index: usize, value: i64 },
}

pub type Result<T> = std::result::Result<T, PickError>;

/// Reject a non-positive target.
pub(crate) fn check_target(target: i64) -> Result<()> {
    if target <= 0 {
        return Err(PickError::NonPositiveTarget { target });
    }
    Ok(())
}

/// Reject the first non-positive weight in `queue`.
pub(crate) fn check_queue(queue: &[i64]) -> Result<()> {
    match queue.iter().position(|&w| w <= 0) {
        Some(index) => Err(PickError::NonPositiveWeight {
            index,
            value: queue[index],
        }),
        None => Ok(()),
    }
}
