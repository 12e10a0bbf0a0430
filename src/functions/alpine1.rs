//! Alpine N.1 test function

use ndarray::Array1;

/// Alpine N.1 function - N-dimensional multimodal, non-differentiable at kinks
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn alpine1(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| (xi * xi.sin() + 0.1 * xi).abs()).sum()
}
