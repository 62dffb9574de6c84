//! One-dimensional lookup tables.
//!
//! See [`lookup::LookupTable1D`] for the evaluation entry point.

pub mod lookup;

pub use lookup::{
    ConfigError, ExtrapMethod, InterpMethod, Lookup, LookupCfg, LookupTable1D, SearchMethod,
    SetOutcome, TableError, TableState,
};
