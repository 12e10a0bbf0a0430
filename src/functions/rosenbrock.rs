//! Rosenbrock test function

use crate::criterion::sum_of_squared_residuals;
use crate::residuals::rosenbrock_residuals;
use ndarray::Array1;

/// Rosenbrock function - 2D banana valley, sum of squared residuals
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    sum_of_squared_residuals(rosenbrock_residuals, x)
}
