//! Prelookup: locating the bracket of a query.
//!
//! A bracket index `i` of a table with `n` samples lies in `[0, n]`:
//! ┌ `i = 0`         : `query <= x[0]`, extrapolate below
//! ├ `0 < i < n`     : `x[i-1] <= query < x[i]`, interpolate
//! └ `i = n`         : `query >= x[n-1]`, extrapolate above
//!
//! The three strategies only differ in cost; for the same valid table and
//! query they return the same bracket. All of them expect `x` to be a valid
//! table (see [`crate::lookup::table::validate_table`]).


use crate::lookup::algorithms::SearchMethod;


/// Resolves the bracket of `query` with the selected strategy.
///
/// # Arguments
/// ├ `method` - strategy to use
/// ├ `x`      - strictly increasing samples
/// ├ `query`  - value to bracket
/// └ `hint`   - previously resolved bracket, only read by [`SearchMethod::Hint`]
///
/// # Returns
/// ├ `Some(i)` with `i` in `[0, x.len()]`
/// └ `None` if `query` is NaN, which has no place in an ordered table
pub fn search_index(method: SearchMethod, x: &[f64], query: f64, hint: usize) -> Option<usize> {
    if query.is_nan() {
        return None;
    }
    let idx = match method {
        SearchMethod::Sequential => search_sequential(x, query),
        SearchMethod::Binary     => search_binary(x, query),
        SearchMethod::Hint       => search_hint(x, query, hint),
    };
    Some(idx)
}

/// Boundary brackets shared by every strategy.
#[inline]
fn boundary(x: &[f64], query: f64) -> Option<usize> {
    let (Some(&first), Some(&last)) = (x.first(), x.last()) else {
        return Some(0);
    };
    if query <= first {
        Some(0)
    } else if query >= last {
        Some(x.len())
    } else {
        None
    }
}

/// Scans from the first sample until one exceeds `query`.
pub fn search_sequential(x: &[f64], query: f64) -> usize {
    if let Some(idx) = boundary(x, query) {
        return idx;
    }
    x.iter().position(|&xi| xi > query).unwrap_or(x.len())
}

/// Bisection over `x`.
pub fn search_binary(x: &[f64], query: f64) -> usize {
    if let Some(idx) = boundary(x, query) {
        return idx;
    }

    // x[lo] <= query < x[hi]
    let mut lo = 0;
    let mut hi = x.len() - 1;
    while lo + 1 < hi {
        let mid = lo + (hi - lo) / 2;
        if x[mid] <= query {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    hi
}

/// Walks from `hint` towards the bracket of `query`.
///
/// # Notes
/// - `hint` is clamped into the interior `[1, n-1]` first, so a boundary or
///   stale hint from a previous table is still a valid starting point.
/// - Each step moves one sample, so the cost is the distance between the hint
///   and the answer.
pub fn search_hint(x: &[f64], query: f64, hint: usize) -> usize {
    if let Some(idx) = boundary(x, query) {
        return idx;
    }

    // interior query => x[0] < query < x[n-1], both walks terminate inside
    let mut i = hint.clamp(1, x.len() - 1);
    while x[i] <= query {
        i += 1;
    }
    while x[i - 1] > query {
        i -= 1;
    }

    i
}
