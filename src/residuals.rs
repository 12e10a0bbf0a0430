//! Residual-vector functions for least-squares criteria.
//!
//! These are the companion building blocks consumed through the
//! [`crate::criterion::ResidualFn`] contract: a point goes in, a vector of
//! residuals comes out, and the criterion is the squared norm of that vector.

use ndarray::{array, Array1};

/// Rosenbrock residuals: `[10 (x2 - x1^2), 1 - x1]`.
///
/// The rosenbrock criterion is the squared norm of this vector, which equals
/// the classic banana function `100 (x2 - x1^2)^2 + (1 - x1)^2`.
pub fn rosenbrock_residuals(x: &Array1<f64>) -> Array1<f64> {
    let x1 = x[0];
    let x2 = x[1];
    array![10.0 * (x2 - x1.powi(2)), 1.0 - x1]
}
