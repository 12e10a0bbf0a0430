//! Cross-in-Tray test function

use ndarray::Array1;

/// Cross-in-Tray function - 2D multimodal, four symmetric global minima
/// Global minimum: f(x) = -2.06261 at (+-1.3494, +-1.3494)
/// Bounds: x_i in [-10, 10]
pub fn crossintray(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let pi = std::f64::consts::PI;
    let inner = (x1.sin() * x2.sin()).abs()
        * (100.0 - (x1.powi(2) + x2.powi(2)).sqrt() / pi).abs().exp();
    -0.0001 * (inner + 1.0).powf(0.1)
}
