//! Brent test function

use ndarray::Array1;

/// Brent function - 2D convex
/// Global minimum: f(x) = exp(-200) at x = (-10, -10)
/// Bounds: x_i in [-10, 10]
pub fn brent(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (x1 + 10.0).powi(2) + (x2 + 10.0).powi(2) + (-x1.powi(2) - x2.powi(2)).exp()
}
