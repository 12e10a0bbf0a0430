//! Adjiman test function

use ndarray::Array1;

/// Adjiman function - 2D multimodal
/// Global minimum: f(x) = -2.0218067833370204 at x = (2, 0.10578)
/// Bounds: x1 in [-1, 2], x2 in [-1, 1]
pub fn adjiman(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    x1.cos() * x2.sin() - x1 / (x2.powi(2) + 1.0)
}
