//! Ackley N.2 test function

use ndarray::Array1;

/// Ackley N.2 function - 2D unimodal
/// Global minimum: f(x) = -200 at x = (0, 0)
/// Bounds: x_i in [-32, 32]
pub fn ackley2(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    -200.0 * (-0.2 * (x1.powi(2) + x2.powi(2)).sqrt()).exp()
}
