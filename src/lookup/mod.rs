// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod traits;
pub use traits::Lookup;

// table, prelookup and evaluation
pub mod table;
pub mod search;
pub mod interpolate;
pub mod extrapolate;
pub mod evaluator;

pub use algorithms::{ExtrapMethod, InterpMethod, SearchMethod};
pub use config::LookupCfg;
pub use errors::{ConfigError, TableError};
pub use evaluator::LookupTable1D;
pub use table::{SetOutcome, TableState};
