//! Table storage and validation.
//!
//! [`TableStore`] owns the `(x, y)` samples together with the size, empty and
//! valid flags. New data is only adopted after the whole candidate pair passes
//! [`validate_table`]; a rejected candidate never touches the stored samples.
//!
//! Validation order (first match wins):
//! ┌ either sequence empty                        -> [`TableState::Empty`]
//! ├ `x.len()` outside `[MIN_TABLE_SIZE, MAX_TABLE_SIZE]` -> [`TableState::SizeInvalid`]
//! ├ `x.len() != y.len()`                         -> [`TableState::SizeMismatch`]
//! ├ `x` non-finite or not strictly increasing    -> [`TableState::NotIncreasing`]
//! └ otherwise                                    -> [`TableState::Valid`]
//!
//! The size bound is checked before the length match, so an undersized or
//! oversized table reports `SizeInvalid` even when `x` and `y` agree in length.


use crate::lookup::config::{MAX_TABLE_SIZE, MIN_TABLE_SIZE};
use crate::lookup::errors::TableError;


/// Classification of an `(x, y)` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableState {
    Empty,
    SizeMismatch,
    SizeInvalid,
    NotIncreasing,
    Valid,
}

/// Result of offering a replacement table.
/// ┌ [`SetOutcome::Success`] : candidate adopted
/// ├ [`SetOutcome::Remain`]  : candidate rejected, previous table still valid
/// └ [`SetOutcome::Fail`]    : candidate rejected, no usable table
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetOutcome {
    Success,
    Remain,
    Fail,
}


/// Validates a candidate pair, reporting the first violated rule.
pub fn validate_table(x: &[f64], y: &[f64]) -> Result<(), TableError> {
    if x.is_empty() || y.is_empty() {
        return Err(TableError::Empty);
    }
    let n = x.len();
    if !(MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(&n) {
        return Err(TableError::SizeInvalid { got: n, min: MIN_TABLE_SIZE, max: MAX_TABLE_SIZE });
    }
    if n != y.len() {
        return Err(TableError::SizeMismatch { x_len: n, y_len: y.len() });
    }
    if let Some(idx) = x.iter().position(|xi| !xi.is_finite()) {
        return Err(TableError::NonFiniteX { idx, got: x[idx] });
    }
    if let Some(i) = x.windows(2).position(|w| w[0] >= w[1]) {
        return Err(TableError::NotIncreasing { idx: i + 1, prev: x[i], next: x[i + 1] });
    }
    Ok(())
}

/// [`TableState`] of a candidate pair.
pub fn check_table_state(x: &[f64], y: &[f64]) -> TableState {
    match validate_table(x, y) {
        Ok(())   => TableState::Valid,
        Err(err) => err.state(),
    }
}


/// Owned, validated sample storage.
#[derive(Debug, Clone)]
pub struct TableStore {
    x: Vec<f64>,
    y: Vec<f64>,
    size:  usize,
    empty: bool,
    valid: bool,
}

impl TableStore {
    pub fn new() -> Self {
        Self { x: Vec::new(), y: Vec::new(), size: 0, empty: true, valid: false }
    }

    /// Offers a replacement table.
    ///
    /// # Behavior
    /// - Valid candidate: stored samples are replaced and flags refreshed.
    /// - Rejected candidate: stored samples are re-checked. A stored table that
    ///   is no longer valid is cleared, never left half-usable.
    ///
    /// # Errors
    /// - The [`TableError`] describing why the candidate was rejected.
    pub fn try_set(&mut self, x: &[f64], y: &[f64]) -> Result<(), TableError> {
        match validate_table(x, y) {
            Ok(()) => {
                self.x.clear();
                self.x.extend_from_slice(x);
                self.y.clear();
                self.y.extend_from_slice(y);
                self.refresh();
                Ok(())
            }
            Err(err) => {
                self.refresh();
                Err(err)
            }
        }
    }

    /// Tri-state form of [`TableStore::try_set`].
    pub fn set(&mut self, x: &[f64], y: &[f64]) -> SetOutcome {
        match self.try_set(x, y) {
            Ok(())                => SetOutcome::Success,
            Err(_) if self.valid  => SetOutcome::Remain,
            Err(_)                => SetOutcome::Fail,
        }
    }

    /// Drops all samples. Always succeeds.
    pub fn clear(&mut self) -> bool {
        self.x.clear();
        self.y.clear();
        self.size  = 0;
        self.empty = true;
        self.valid = false;
        true
    }

    /// Re-runs validation on the stored pair and clears it if it is unusable.
    pub fn refresh(&mut self) {
        self.valid = self.state() == TableState::Valid;
        if self.valid {
            self.empty = false;
            self.size  = self.x.len();
        } else if !self.empty {
            self.clear();
        }
    }

    pub fn state(&self) -> TableState { check_table_state(&self.x, &self.y) }

    // getters
    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn size(&self) -> usize { self.size }
    pub fn is_empty(&self) -> bool { self.empty }
    pub fn is_valid(&self) -> bool { self.valid }

    /// `(y[0], y[n-1])` of a valid table.
    pub fn boundary_y(&self) -> Option<(f64, f64)> {
        if !self.valid {
            return None;
        }
        Some((*self.y.first()?, *self.y.last()?))
    }
}

impl Default for TableStore {
    fn default() -> Self { Self::new() }
}
