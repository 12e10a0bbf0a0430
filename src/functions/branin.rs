//! Branin test function

use ndarray::Array1;

/// Branin function - 2D multimodal, three global minima
/// Global minimum: f(x) = 0.39788735772973816 at (pi, 2.275) among others
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn branin(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let pi = std::f64::consts::PI;
    let res = (x2 - 5.1 / (4.0 * pi.powi(2)) * x1.powi(2) + 5.0 / pi * x1 - 6.0).powi(2);
    res + 10.0 * (1.0 - 1.0 / (8.0 * pi)) * x1.cos() + 10.0
}
