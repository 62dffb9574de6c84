use lut1d::lookup::algorithms::InterpMethod;
use lut1d::lookup::config::DEFAULT_EPSILON;
use lut1d::lookup::interpolate::interpolate;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

const X: [f64; 4] = [0.0, 1.0, 2.0, 4.0];
const Y: [f64; 4] = [0.0, 10.0, 20.0, 0.0];

fn interp(method: InterpMethod, idx: usize, q: f64) -> f64 {
    interpolate(method, &X, &Y, idx, q, DEFAULT_EPSILON).unwrap()
}

#[test]
fn linear_midpoints() {
    assert!(approx_eq(interp(InterpMethod::Linear, 1, 0.5), 5.0));
    assert!(approx_eq(interp(InterpMethod::Linear, 2, 1.25), 12.5));
    assert!(approx_eq(interp(InterpMethod::Linear, 3, 3.0), 10.0));
}

#[test]
fn linear_hits_samples() {
    // a query equal to x[i-1] lands in bracket i
    for i in 1..X.len() {
        assert!(approx_eq(interp(InterpMethod::Linear, i, X[i - 1]), Y[i - 1]));
    }
}

#[test]
fn linear_degenerate_segment_uses_half_weight() {
    let x = [0.0, 1e-13, 1.0];
    let y = [2.0, 4.0, 6.0];
    let yq = interpolate(InterpMethod::Linear, &x, &y, 1, 5e-14, DEFAULT_EPSILON).unwrap();
    assert!(approx_eq(yq, 3.0));

    // a larger tolerance widens the guard
    let yq = interpolate(InterpMethod::Linear, &x, &y, 2, 0.9, 2.0).unwrap();
    assert!(approx_eq(yq, 5.0));
}

#[test]
fn nearest_prefers_previous_on_tie() {
    assert_eq!(interp(InterpMethod::Nearest, 1, 0.5), 0.0);
    assert_eq!(interp(InterpMethod::Nearest, 1, 0.49), 0.0);
    assert_eq!(interp(InterpMethod::Nearest, 1, 0.51), 10.0);
    assert_eq!(interp(InterpMethod::Nearest, 3, 3.5), 0.0);
}

#[test]
fn next_and_previous() {
    assert_eq!(interp(InterpMethod::Next, 2, 1.1), 20.0);
    assert_eq!(interp(InterpMethod::Previous, 2, 1.9), 10.0);
}

#[test]
fn boundary_bracket_is_rejected() {
    assert_eq!(interpolate(InterpMethod::Linear, &X, &Y, 0, -1.0, DEFAULT_EPSILON), None);
    assert_eq!(interpolate(InterpMethod::Linear, &X, &Y, 4, 5.0, DEFAULT_EPSILON), None);
}
