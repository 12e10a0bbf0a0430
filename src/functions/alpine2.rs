//! Alpine N.2 test function

use ndarray::Array1;

/// Alpine N.2 function - N-dimensional multimodal, product-reduced
/// Global minimum: f(x) = -2.808^n at x = (7.917, ..., 7.917)
/// Bounds: x_i in [0, 10]; negative coordinates yield NaN via sqrt
pub fn alpine2(x: &Array1<f64>) -> f64 {
    -x.iter()
        .map(|&xi| xi.sqrt() * xi.sin())
        .product::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_alpine2_negative_coordinate_propagates_nan() {
        // sqrt of a negative coordinate is a legitimate domain edge, not an error.
        assert!(alpine2(&array![-1.0, 2.0]).is_nan());
    }
}
