//! Error types

use crate::wheel::{MAX_OPTIONS, MIN_OPTIONS};
use thiserror::Error;

/// Errors from building a wheel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    /// Fewer options than a wheel can be divided into
    #[error("a wheel needs at least {MIN_OPTIONS} options, got {0}")]
    TooFewOptions(usize),

    /// More options than the wheel supports
    #[error("a wheel holds at most {MAX_OPTIONS} options, got {0}")]
    TooManyOptions(usize),
}
