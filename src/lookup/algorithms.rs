//! Defines the lookup method variants.
//!
//! Provides one enum per stage of a lookup:
//! ┌ [`SearchMethod`] : how the bracketing interval is located
//! ├ [`InterpMethod`] : how a value is computed inside the table
//! └ [`ExtrapMethod`] : how a value is computed outside the table
//!
//! Each variant is a tag; the computation lives in a pure function of the
//! matching module ([`crate::lookup::search`], [`crate::lookup::interpolate`],
//! [`crate::lookup::extrapolate`]).


/// Index search variants.
/// ┌ [`SearchMethod::Sequential`] : linear scan from the first sample, O(n)
/// ├ [`SearchMethod::Binary`]     : bisection over `x`, O(log n)
/// └ [`SearchMethod::Hint`]       : walk outward from the last bracket,
///                                  O(1) for correlated queries
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SearchMethod {
    Sequential,
    #[default]
    Binary,
    Hint,
}

/// Interpolation variants, used for queries strictly inside the table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterpMethod {
    #[default]
    Linear,
    Nearest,
    Next,
    Previous,
}

/// Extrapolation variants, used for queries at or beyond the table bounds.
/// ┌ [`ExtrapMethod::Clip`]    : hold the boundary sample
/// ├ [`ExtrapMethod::Linear`]  : extend the boundary segment
/// └ [`ExtrapMethod::Specify`] : return the configured lower/upper constant
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExtrapMethod {
    #[default]
    Clip,
    Linear,
    Specify,
}

impl SearchMethod {
    pub const fn method_name(self) -> &'static str {
        match self {
            SearchMethod::Sequential => "sequential",
            SearchMethod::Binary     => "binary",
            SearchMethod::Hint       => "hint",
        }
    }
}

impl InterpMethod {
    pub const fn method_name(self) -> &'static str {
        match self {
            InterpMethod::Linear   => "linear",
            InterpMethod::Nearest  => "nearest",
            InterpMethod::Next     => "next",
            InterpMethod::Previous => "previous",
        }
    }
}

impl ExtrapMethod {
    pub const fn method_name(self) -> &'static str {
        match self {
            ExtrapMethod::Clip    => "clip",
            ExtrapMethod::Linear  => "linear",
            ExtrapMethod::Specify => "specify",
        }
    }
}

impl std::fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
impl std::fmt::Display for InterpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
impl std::fmt::Display for ExtrapMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
