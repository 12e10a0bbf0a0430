//! Brown test function

use ndarray::Array1;

/// Brown function - 2D convex, ill-conditioned
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-1, 4]
pub fn brown(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (x1.powi(2)).powf(x2.powi(2) + 1.0) + (x2.powi(2)).powf(x1.powi(2) + 1.0)
}
