//! Ackley N.4 test function

use ndarray::Array1;

/// Ackley N.4 function - 2D multimodal
/// Global minimum: f(x) = -4.5901006651507235 at x = (-1.51, -0.755)
/// Bounds: x_i in [-35, 35]
pub fn ackley4(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (-0.2f64).exp() * (x1.powi(2) + x2.powi(2)).sqrt()
        + 3.0 * ((2.0 * x1).cos() + (2.0 * x2).sin())
}
