//! Extrapolation at and beyond the table bounds.
//!
//! Only boundary brackets are accepted: `0` (below `x[0]`) and `n`
//! (above `x[n-1]`). Any other bracket yields `None` and the caller keeps its
//! previous result.


use crate::lookup::algorithms::ExtrapMethod;
use crate::lookup::interpolate::blend;


/// Constants returned by [`ExtrapMethod::Specify`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ExtrapBounds {
    pub lower: f64,
    pub upper: f64,
}

/// Extrapolates `query` on boundary bracket `idx` with the selected method.
///
/// # Behavior
/// - [`ExtrapMethod::Clip`]    : `y[0]` below, `y[n-1]` above.
/// - [`ExtrapMethod::Linear`]  : extends `(x[0], x[1])` below or
///   `(x[n-2], x[n-1])` above, with the same degenerate-segment guard as
///   linear interpolation.
/// - [`ExtrapMethod::Specify`] : `bounds.lower` below, `bounds.upper` above.
///
/// # Returns
/// `None` if `idx` is neither `0` nor `n`, or the table has fewer than two
/// samples.
pub fn extrapolate(
    method : ExtrapMethod,
    x      : &[f64],
    y      : &[f64],
    idx    : usize,
    query  : f64,
    epsilon: f64,
    bounds : ExtrapBounds,
) -> Option<f64> {
    let n = x.len();
    if n < 2 || y.len() != n {
        return None;
    }
    let below = idx == 0;
    if !below && idx != n {
        return None;
    }

    let yq = match (method, below) {
        (ExtrapMethod::Clip, true)     => y[0],
        (ExtrapMethod::Clip, false)    => y[n - 1],
        (ExtrapMethod::Linear, true)   => blend(x[0], x[1], y[0], y[1], query, epsilon),
        (ExtrapMethod::Linear, false)  => blend(x[n - 2], x[n - 1], y[n - 2], y[n - 1], query, epsilon),
        (ExtrapMethod::Specify, true)  => bounds.lower,
        (ExtrapMethod::Specify, false) => bounds.upper,
    };

    Some(yq)
}
