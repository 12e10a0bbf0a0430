//! Criterion function records.
//!
//! A [`Criterion`] pairs a pure test function with its name and declared input
//! length. Arity is a declared property, not inferred from the input, so a
//! wrong-length vector is rejected before any computation runs. The raw
//! `pub fn` criterion functions in [`crate::functions`] stay unchecked, in the
//! same style as the rest of this family of crates.

use crate::error::{BenchmarkError, Result};
use ndarray::Array1;

/// Test function type definition.
pub type CriterionFn = fn(&Array1<f64>) -> f64;

/// Residual-vector function type: maps a point to a vector of residuals.
///
/// Supplied by a companion least-squares function library. The only contract
/// is "vector in, vector out, deterministic, no side effects".
pub type ResidualFn = fn(&Array1<f64>) -> Array1<f64>;

/// Declared input length of a criterion function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The function requires exactly this many variables.
    Fixed(usize),
    /// The function reduces a vector of any length (via sum, mean or product).
    Any,
}

impl Arity {
    /// Returns `true` if an input of length `len` satisfies this arity.
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            Arity::Fixed(n) => len == n,
            Arity::Any => true,
        }
    }
}

/// A named criterion function with its declared arity.
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    /// Function family name, e.g. `"ackley"`.
    pub name: &'static str,
    /// Declared input length.
    pub arity: Arity,
    eval: CriterionFn,
}

impl Criterion {
    /// Creates a criterion record from a function pointer and declared arity.
    pub const fn new(name: &'static str, arity: Arity, eval: CriterionFn) -> Self {
        Self { name, arity, eval }
    }

    /// Evaluates the criterion at `x`, checking the arity first.
    ///
    /// Wrong-length inputs fail with [`BenchmarkError::ArityMismatch`] before
    /// any computation. Mathematical singularities inside a correctly-shaped
    /// input (division by zero, log of a negative coordinate) are not caught:
    /// they come back as infinities or NaN like any other value.
    pub fn evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        match self.arity {
            Arity::Fixed(n) if x.len() != n => Err(BenchmarkError::ArityMismatch {
                function: self.name,
                expected: n,
                got: x.len(),
            }),
            _ => Ok((self.eval)(x)),
        }
    }
}

/// Squared Euclidean norm of a residual vector: `r(x) . r(x)`.
///
/// Building block for criteria defined as sums of squared residuals, with the
/// residual function injected so it can be swapped for a stub in tests.
pub fn sum_of_squared_residuals(residuals: ResidualFn, x: &Array1<f64>) -> f64 {
    let r = residuals(x);
    r.dot(&r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    fn two_dim(x: &Array1<f64>) -> f64 {
        x[0] + x[1]
    }

    fn any_dim(x: &Array1<f64>) -> f64 {
        x.sum()
    }

    #[test]
    fn test_fixed_arity_rejects_wrong_length() {
        let c = Criterion::new("two_dim", Arity::Fixed(2), two_dim);

        assert_eq!(c.evaluate(&array![1.0, 2.0]).unwrap(), 3.0);

        let err = c.evaluate(&array![1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.is_arity_error());
        assert_eq!(
            err,
            BenchmarkError::ArityMismatch {
                function: "two_dim",
                expected: 2,
                got: 3,
            }
        );
    }

    #[test]
    fn test_any_arity_accepts_all_lengths() {
        let c = Criterion::new("any_dim", Arity::Any, any_dim);

        assert_eq!(c.evaluate(&array![1.0]).unwrap(), 1.0);
        assert_eq!(c.evaluate(&array![1.0, 2.0, 3.0, 4.0]).unwrap(), 10.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let c = Criterion::new("two_dim", Arity::Fixed(2), two_dim);
        let x = array![0.25, -4.5];

        assert_eq!(c.evaluate(&x).unwrap(), c.evaluate(&x).unwrap());
    }

    #[test]
    fn test_singularities_propagate_as_values() {
        fn inverse(x: &Array1<f64>) -> f64 {
            1.0 / x[0]
        }
        let c = Criterion::new("inverse", Arity::Fixed(1), inverse);

        // A zero coordinate is a legitimate singularity, not an error.
        assert!(c.evaluate(&array![0.0]).unwrap().is_infinite());
    }

    #[test]
    fn test_sum_of_squared_residuals_with_stub() {
        fn stub(x: &Array1<f64>) -> Array1<f64> {
            array![x[0] - 1.0, 2.0 * x[1]]
        }

        assert_eq!(sum_of_squared_residuals(stub, &array![1.0, 0.0]), 0.0);
        assert_eq!(sum_of_squared_residuals(stub, &array![3.0, 1.0]), 8.0);
    }
}
