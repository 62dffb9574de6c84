//! Shared configuration for lookup tables.
//!
//! Provides table size bounds [`MIN_TABLE_SIZE`], [`MAX_TABLE_SIZE`] and the
//! default degenerate-segment tolerance [`DEFAULT_EPSILON`].
//!
//! [`LookupCfg`] — method selection and extrapolation constants
//! ├ `search`       : [`SearchMethod`]
//! ├ `interp`       : [`InterpMethod`]
//! ├ `extrap`       : [`ExtrapMethod`]
//! ├ `lower_extrap` : constant returned below the table by `Specify`
//! ├ `upper_extrap` : constant returned above the table by `Specify`
//! └ `epsilon`      : segments narrower than this blend with weight 0.5


use crate::lookup::algorithms::{ExtrapMethod, InterpMethod, SearchMethod};
use crate::lookup::errors::ConfigError;

pub const MIN_TABLE_SIZE: usize = 2;
/// Upper bound on samples per table.
pub const MAX_TABLE_SIZE: usize = 1_000_000;
pub const DEFAULT_EPSILON: f64 = 1e-12;


/// Lookup configuration
///
/// # Defaults
///
/// ┌ `search`  - [`SearchMethod::Binary`]
/// ├ `interp`  - [`InterpMethod::Linear`]
/// ├ `extrap`  - [`ExtrapMethod::Clip`]
/// ├ `lower_extrap`, `upper_extrap` - `0.0`
/// └ `epsilon` - [`DEFAULT_EPSILON`]
///
/// # Validation:
/// └ [`LookupCfg::validate()`] checks `epsilon` is finite and > 0.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct LookupCfg {
    search:       Option<SearchMethod>,
    interp:       Option<InterpMethod>,
    extrap:       Option<ExtrapMethod>,
    lower_extrap: Option<f64>,
    upper_extrap: Option<f64>,
    epsilon:      Option<f64>,
}
impl LookupCfg {
    pub const DEFAULT_EXTRAP_VALUE: f64 = 0.0;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_search(mut self, v: SearchMethod) -> Self { self.search = Some(v); self }
    pub fn with_interp(mut self, v: InterpMethod) -> Self { self.interp = Some(v); self }
    pub fn with_extrap(mut self, v: ExtrapMethod) -> Self { self.extrap = Some(v); self }
    pub fn with_lower_extrap(mut self, v: f64) -> Self { self.lower_extrap = Some(v); self }
    pub fn with_upper_extrap(mut self, v: f64) -> Self { self.upper_extrap = Some(v); self }
    pub fn with_epsilon(mut self, v: f64) -> Self { self.epsilon = Some(v); self }

    #[inline] #[must_use] pub fn search(&self) -> SearchMethod { self.search.unwrap_or_default() }
    #[inline] #[must_use] pub fn interp(&self) -> InterpMethod { self.interp.unwrap_or_default() }
    #[inline] #[must_use] pub fn extrap(&self) -> ExtrapMethod { self.extrap.unwrap_or_default() }
    #[inline] #[must_use] pub fn lower_extrap(&self) -> f64 { self.lower_extrap.unwrap_or(Self::DEFAULT_EXTRAP_VALUE) }
    #[inline] #[must_use] pub fn upper_extrap(&self) -> f64 { self.upper_extrap.unwrap_or(Self::DEFAULT_EXTRAP_VALUE) }
    #[inline] #[must_use] pub fn epsilon(&self) -> f64 { self.epsilon.unwrap_or(DEFAULT_EPSILON) }

    pub fn validate(&self) -> Result<LookupCfg, ConfigError> {
        let epsilon = validate_epsilon(self.epsilon())?;
        Ok(Self {
            search:       Some(self.search()),
            interp:       Some(self.interp()),
            extrap:       Some(self.extrap()),
            lower_extrap: Some(self.lower_extrap()),
            upper_extrap: Some(self.upper_extrap()),
            epsilon:      Some(epsilon),
        })
    }
}

pub(crate) fn validate_epsilon(v: f64) -> Result<f64, ConfigError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(ConfigError::InvalidEpsilon { got: v });
    }
    Ok(v)
}
