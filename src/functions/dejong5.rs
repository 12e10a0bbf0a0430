//! De Jong N.5 (Shekel's foxholes) test function

use ndarray::Array1;

/// De Jong N.5 function - 2D, 25 sharp local minima on a 5x5 grid
/// Global minimum: f(x) = 0.998003838... near x = (-32, -32)
/// Bounds: x_i in [-65.536, 65.536]
pub fn dejong5(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    const B: [f64; 5] = [-32.0, -16.0, 0.0, 16.0, 32.0];

    let mut sum = 0.0;
    for i in 0..25 {
        let a1 = B[i / 5];
        let a2 = B[i % 5];
        sum += 1.0 / ((i + 1) as f64 + (x1 - a1).powi(6) + (x2 - a2).powi(6));
    }
    (0.002 + sum).recip()
}
