//! Lookup table error types.
//!
//! ┌ [`TableError`]  : why an offered table was rejected
//! │   ├ empty input
//! │   ├ size outside `[MIN_TABLE_SIZE, MAX_TABLE_SIZE]`
//! │   ├ x/y length mismatch
//! │   ├ x not finite
//! │   └ x not strictly increasing
//! │
//! └ [`ConfigError`] : invalid configuration values
//!     └ degenerate-segment tolerance not finite or <= 0
//!
//! Evaluation itself never fails; these errors only back the
//! `Result`-returning setters and constructors.


use thiserror::Error;
use crate::lookup::table::TableState;


/// Table rejection reasons, one per non-valid [`TableState`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TableError {
    #[error("empty input vector(s)")]
    Empty,

    #[error("invalid table size: got {got}, must be within [{min}, {max}]")]
    SizeInvalid { got: usize, min: usize, max: usize },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    SizeMismatch { x_len: usize, y_len: usize },

    #[error("non-finite x-value {got} at index {idx}")]
    NonFiniteX { idx: usize, got: f64 },

    #[error("x-values must be strictly increasing: x[{idx}]={next} after {prev}")]
    NotIncreasing { idx: usize, prev: f64, next: f64 },
}

impl TableError {
    /// Table classification matching this rejection.
    ///
    /// A non-finite `x` sample has no place in an ordered axis and is
    /// classified with the ordering violations.
    pub const fn state(&self) -> TableState {
        match self {
            TableError::Empty                => TableState::Empty,
            TableError::SizeInvalid { .. }   => TableState::SizeInvalid,
            TableError::SizeMismatch { .. }  => TableState::SizeMismatch,
            TableError::NonFiniteX { .. }    => TableState::NotIncreasing,
            TableError::NotIncreasing { .. } => TableState::NotIncreasing,
        }
    }
}


/// Configuration errors.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid epsilon {got}: must be finite and > 0")]
    InvalidEpsilon { got: f64 },
}
