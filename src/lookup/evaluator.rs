//! One-dimensional lookup table evaluation.
//!
//! [`LookupTable1D`] composes the table store, the prelookup and the
//! interpolation/extrapolation stages:
//!
//! ```text
//! lookup(x)
//! ├ table invalid -> refresh table state, return last result
//! ├ bracket = search(x)
//! ├ bracket at boundary ? extrapolate : interpolate
//! └ cache x and result, return result
//! ```
//!
//! Evaluation never fails. Against an invalid or cleared table it keeps
//! returning the last computed result, so a control loop holds a defined value
//! until a valid table is set again.
//!
//! # Example
//! ```
//! use lut1d::{LookupTable1D, ExtrapMethod, SetOutcome};
//!
//! let mut table = LookupTable1D::new();
//! assert_eq!(table.set_table(&[0.0, 1.0, 2.0, 3.0], &[0.0, 10.0, 20.0, 30.0]), SetOutcome::Success);
//! assert_eq!(table.lookup(1.5), 15.0);
//!
//! table.set_extrap_method(ExtrapMethod::Linear);
//! assert_eq!(table.lookup(-1.0), -10.0);
//! ```


use crate::lookup::algorithms::{ExtrapMethod, InterpMethod, SearchMethod};
use crate::lookup::config::{validate_epsilon, LookupCfg};
use crate::lookup::errors::{ConfigError, TableError};
use crate::lookup::extrapolate::{extrapolate, ExtrapBounds};
use crate::lookup::interpolate::interpolate;
use crate::lookup::search::search_index;
use crate::lookup::table::{SetOutcome, TableState, TableStore};
use crate::lookup::traits::Lookup;


/// State kept between evaluations.
///
/// - `last_input`  : query of the last successful evaluation
/// - `last_output` : result of the last successful evaluation
/// - `last_index`  : last resolved bracket, seeds [`SearchMethod::Hint`]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct EvaluationMemory {
    pub last_input:  f64,
    pub last_output: f64,
    pub last_index:  usize,
}


/// Lookup table over strictly increasing `x` samples.
#[derive(Debug, Clone)]
pub struct LookupTable1D {
    table:   TableStore,
    memory:  EvaluationMemory,
    search:  SearchMethod,
    interp:  InterpMethod,
    extrap:  ExtrapMethod,
    bounds:  ExtrapBounds,
    epsilon: f64,
    write_succeeded: bool,
}

impl LookupTable1D {
    /// Empty table with the default [`LookupCfg`].
    pub fn new() -> Self {
        let cfg = LookupCfg::new();
        Self {
            table:   TableStore::new(),
            memory:  EvaluationMemory::default(),
            search:  cfg.search(),
            interp:  cfg.interp(),
            extrap:  cfg.extrap(),
            bounds:  ExtrapBounds { lower: cfg.lower_extrap(), upper: cfg.upper_extrap() },
            epsilon: cfg.epsilon(),
            write_succeeded: false,
        }
    }

    /// Empty table with methods and constants taken from `cfg`.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidEpsilon`] if `cfg` fails validation.
    pub fn from_cfg(cfg: LookupCfg) -> Result<Self, ConfigError> {
        let cfg = cfg.validate()?;
        Ok(Self {
            search:  cfg.search(),
            interp:  cfg.interp(),
            extrap:  cfg.extrap(),
            bounds:  ExtrapBounds { lower: cfg.lower_extrap(), upper: cfg.upper_extrap() },
            epsilon: cfg.epsilon(),
            ..Self::new()
        })
    }

    /// Table holding `(x, y)` with the default configuration.
    ///
    /// # Errors
    /// - The [`TableError`] describing why `(x, y)` is not a valid table.
    pub fn with_table(x: &[f64], y: &[f64]) -> Result<Self, TableError> {
        let mut table = Self::new();
        table.try_set_table(x, y)?;
        Ok(table)
    }

    /// Offers a replacement table.
    ///
    /// # Returns
    /// ├ [`SetOutcome::Success`] : `(x, y)` adopted
    /// ├ [`SetOutcome::Remain`]  : `(x, y)` rejected, previous table kept
    /// └ [`SetOutcome::Fail`]    : `(x, y)` rejected, no usable table
    pub fn set_table(&mut self, x: &[f64], y: &[f64]) -> SetOutcome {
        let outcome = self.table.set(x, y);
        self.write_succeeded = outcome == SetOutcome::Success;

        #[cfg(feature = "defmt")]
        {
            if !self.write_succeeded {
                defmt::warn!("table rejected ({}), outcome {}", crate::lookup::table::check_table_state(x, y), outcome);
            }
        }

        outcome
    }

    /// Same as [`LookupTable1D::set_table`], reporting why a table was rejected.
    ///
    /// # Errors
    /// - The [`TableError`] of the rejected candidate. Whether the previous
    ///   table survived is visible through [`LookupTable1D::is_valid`].
    pub fn try_set_table(&mut self, x: &[f64], y: &[f64]) -> Result<(), TableError> {
        let res = self.table.try_set(x, y);
        self.write_succeeded = res.is_ok();
        res
    }

    /// Drops the samples; the cached result survives. Always returns `true`.
    pub fn clear_table(&mut self) -> bool {
        self.table.clear()
    }

    /// Evaluates the table at `query`.
    ///
    /// # Behavior
    /// - Invalid table: table state is refreshed and the last result returned.
    /// - NaN query: no bracket exists, the last result is returned.
    /// - Otherwise the result is computed, cached and returned.
    pub fn lookup(&mut self, query: f64) -> f64 {
        if !self.table.is_valid() {
            self.table.refresh();
            #[cfg(feature = "defmt")]
            defmt::debug!("lookup on invalid table ({}), holding {}", self.table.state(), self.memory.last_output);
            return self.memory.last_output;
        }

        let Some(idx) = self.prelookup(query) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("no bracket for NaN query, holding {}", self.memory.last_output);
            return self.memory.last_output;
        };

        let x = self.table.x();
        let y = self.table.y();
        let result = if idx == 0 || idx == self.table.size() {
            extrapolate(self.extrap, x, y, idx, query, self.epsilon, self.bounds)
        } else {
            interpolate(self.interp, x, y, idx, query, self.epsilon)
        };

        if let Some(yq) = result {
            self.memory.last_output = yq;
        }
        self.memory.last_input = query;
        self.memory.last_output
    }

    /// Resolves and remembers the bracket of `query`.
    ///
    /// An out-of-range bracket can only come from an internal bug; debug
    /// builds assert, release builds reuse the previous bracket.
    fn prelookup(&mut self, query: f64) -> Option<usize> {
        let n = self.table.size();
        let idx = search_index(self.search, self.table.x(), query, self.memory.last_index)?;
        debug_assert!(idx <= n, "bracket {idx} outside [0, {n}]");

        if idx <= n {
            self.memory.last_index = idx;
            Some(idx)
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("bracket {} outside [0, {}], reusing {}", idx, n, self.memory.last_index);
            Some(self.memory.last_index)
        }
    }

    // method selection
    pub fn set_search_method(&mut self, method: SearchMethod) { self.search = method; }
    pub fn set_interp_method(&mut self, method: InterpMethod) { self.interp = method; }

    /// Selects the extrapolation method.
    ///
    /// With a valid table the [`ExtrapMethod::Specify`] constants are reset
    /// to `y[0]` and `y[n-1]`, so `Specify` behaves like `Clip` until they are
    /// overridden.
    pub fn set_extrap_method(&mut self, method: ExtrapMethod) {
        self.extrap = method;
        if let Some((lower, upper)) = self.table.boundary_y() {
            self.bounds = ExtrapBounds { lower, upper };
        }
    }

    /// Selects the extrapolation method together with the
    /// [`ExtrapMethod::Specify`] constants.
    pub fn set_extrap_method_with(&mut self, method: ExtrapMethod, lower: f64, upper: f64) {
        self.extrap = method;
        self.bounds = ExtrapBounds { lower, upper };
    }

    pub fn set_lower_extrap_value(&mut self, value: f64) { self.bounds.lower = value; }
    pub fn set_upper_extrap_value(&mut self, value: f64) { self.bounds.upper = value; }

    /// Sets the degenerate-segment tolerance.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidEpsilon`] if `value` is not finite and > 0.
    pub fn set_epsilon(&mut self, value: f64) -> Result<(), ConfigError> {
        self.epsilon = validate_epsilon(value)?;
        Ok(())
    }

    // queries
    pub fn size(&self) -> usize { self.table.size() }
    pub fn is_valid(&self) -> bool { self.table.is_valid() }
    pub fn is_empty(&self) -> bool { self.table.is_empty() }
    pub fn last_write_succeeded(&self) -> bool { self.write_succeeded }
    pub fn state(&self) -> TableState { self.table.state() }

    // getters
    pub fn x_table(&self) -> &[f64] { self.table.x() }
    pub fn y_table(&self) -> &[f64] { self.table.y() }
    pub fn memory(&self) -> EvaluationMemory { self.memory }
    pub fn last_input(&self) -> f64 { self.memory.last_input }
    pub fn last_output(&self) -> f64 { self.memory.last_output }
    pub fn last_index(&self) -> usize { self.memory.last_index }
    pub fn search_method(&self) -> SearchMethod { self.search }
    pub fn interp_method(&self) -> InterpMethod { self.interp }
    pub fn extrap_method(&self) -> ExtrapMethod { self.extrap }
    pub fn extrap_bounds(&self) -> ExtrapBounds { self.bounds }
    pub fn epsilon(&self) -> f64 { self.epsilon }

    /// Current configuration as a [`LookupCfg`].
    pub fn cfg(&self) -> LookupCfg {
        LookupCfg::new()
            .with_search(self.search)
            .with_interp(self.interp)
            .with_extrap(self.extrap)
            .with_lower_extrap(self.bounds.lower)
            .with_upper_extrap(self.bounds.upper)
            .with_epsilon(self.epsilon)
    }
}

impl Default for LookupTable1D {
    fn default() -> Self { Self::new() }
}

impl Lookup for LookupTable1D {
    #[inline]
    fn lookup(&mut self, x: f64) -> f64 {
        LookupTable1D::lookup(self, x)
    }
}
