//! Bird test function

use ndarray::Array1;

/// Bird function - 2D multimodal, two symmetric global minima
/// Global minimum: f(x) = -106.7645367 at (4.70104, 3.15294) and (-1.58214, -3.13024)
/// Bounds: x_i in [-2*pi, 2*pi]
pub fn bird(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let res = x1.sin() * ((1.0 - x2.cos()).powi(2)).exp();
    res + x2.cos() * ((1.0 - x1.sin()).powi(2)).exp() + (x1 - x2).powi(2)
}
