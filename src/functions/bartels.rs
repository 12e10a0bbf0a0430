//! Bartels Conn test function

use ndarray::Array1;

/// Bartels Conn function - 2D multimodal, non-differentiable
/// Global minimum: f(x) = 1 at x = (0, 0)
/// Bounds: x_i in [-500, 500]
pub fn bartels(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (x1.powi(2) + x2.powi(2) + x1 * x2).abs() + x1.sin().abs() + x2.cos().abs()
}
