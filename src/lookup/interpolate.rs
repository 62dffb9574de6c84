//! Interpolation inside the table.
//!
//! Every method works on the bracket `i` (`0 < i < n`) resolved by
//! [`crate::lookup::search`], i.e. the segment
//! `(x[i-1], y[i-1])` - `(x[i], y[i])` containing the query.


use crate::lookup::algorithms::InterpMethod;


/// Weighted blend `y1 + w * (y2 - y1)` with `w = (xq - x1) / (x2 - x1)`.
///
/// Segments narrower than `epsilon` blend with `w = 0.5`. Also used for
/// extrapolation, where `w` falls outside `[0, 1]`.
#[inline]
pub(crate) fn blend(x1: f64, x2: f64, y1: f64, y2: f64, xq: f64, epsilon: f64) -> f64 {
    let w = if (x2 - x1).abs() < epsilon { 0.5 } else { (xq - x1) / (x2 - x1) };
    y1 + w * (y2 - y1)
}

/// Interpolates `query` on bracket `idx` with the selected method.
///
/// # Arguments
/// ├ `method`  - interpolation method
/// ├ `x`, `y`  - table samples
/// ├ `idx`     - interior bracket, `0 < idx < x.len()`
/// ├ `query`   - value to evaluate
/// └ `epsilon` - degenerate-segment tolerance for [`InterpMethod::Linear`]
///
/// # Returns
/// `None` if `idx` is not an interior bracket of the table.
pub fn interpolate(
    method : InterpMethod,
    x      : &[f64],
    y      : &[f64],
    idx    : usize,
    query  : f64,
    epsilon: f64,
) -> Option<f64> {
    if idx == 0 || idx >= x.len() || idx >= y.len() {
        return None;
    }

    let (x1, x2) = (x[idx - 1], x[idx]);
    let (y1, y2) = (y[idx - 1], y[idx]);

    let yq = match method {
        InterpMethod::Linear   => blend(x1, x2, y1, y2, query, epsilon),
        // ties go to the previous sample
        InterpMethod::Nearest  => if query - x1 <= x2 - query { y1 } else { y2 },
        InterpMethod::Next     => y2,
        InterpMethod::Previous => y1,
    };

    Some(yq)
}
