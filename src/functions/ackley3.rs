//! Ackley N.3 test function

use ndarray::Array1;

/// Ackley N.3 function - 2D multimodal, no unique global minimizer
/// Global minimum: f(x) = -170.07756299785044, attained symmetrically
/// Bounds: x_i in [-32, 32]
pub fn ackley3(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let res = -200.0 * (-0.2 * (x1.powi(2) + x2.powi(2)).sqrt()).exp();
    res + 5.0 * ((3.0 * x1).cos() + (3.0 * x2).sin()).exp()
}
