//! Ackley test function

use ndarray::Array1;

/// Ackley function - N-dimensional multimodal, mean-reduced
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let mean_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum::<f64>() / n;
    let mean_cos: f64 = x
        .iter()
        .map(|&xi| (2.0 * std::f64::consts::PI * xi).cos())
        .sum::<f64>()
        / n;

    -20.0 * (-0.2 * mean_sq.sqrt()).exp() - mean_cos.exp() + 20.0 + std::f64::consts::E
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_ackley_zero_at_origin() {
        for n in [2, 5, 10] {
            let x = Array1::zeros(n);
            assert!(ackley(&x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ackley_mean_reduction_is_dimension_invariant() {
        // The mean reduction makes constant vectors of any length score alike.
        let x2 = Array1::from_elem(2, 3.0);
        let x10 = Array1::from_elem(10, 3.0);
        assert!((ackley(&x2) - ackley(&x10)).abs() < 1e-12);
    }
}
