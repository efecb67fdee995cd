//! Zero-guarded arithmetic shared by every index formula.
//!
//! Reflectance ratios are undefined where the denominator vanishes. Those
//! pixels map to `0.0` instead of `NaN`/`inf`.

use ndarray::{Array1, ArrayView1, Zip};

/// `numerator / denominator`, or `0.0` when `denominator == 0.0` exactly.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0. {
        0.
    } else {
        numerator / denominator
    }
}

/// Elementwise [safe_div] over two columns of equal length.
pub fn safe_divide<'a>(
    numerator: impl Into<ArrayView1<'a, f64>>,
    denominator: impl Into<ArrayView1<'a, f64>>,
) -> Array1<f64> {
    Zip::from(numerator.into())
        .and(denominator.into())
        .map_collect(|&numerator, &denominator| safe_div(numerator, denominator))
}

/// Normalized difference `(b - a) / (b + a)`.
///
/// NDVI is `normalized_difference(red, nir)`.
pub fn normalized_difference<'a>(
    a: impl Into<ArrayView1<'a, f64>>,
    b: impl Into<ArrayView1<'a, f64>>,
) -> Array1<f64> {
    Zip::from(a.into())
        .and(b.into())
        .map_collect(|&a, &b| safe_div(b - a, b + a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rstest::rstest;

    #[rstest]
    #[case(1., 0., 0.)]
    #[case(0., 0., 0.)]
    #[case(-3., 0., 0.)]
    #[case(1., 4., 0.25)]
    #[case(-1., -0.5, 2.)]
    fn scalar_division(#[case] numerator: f64, #[case] denominator: f64, #[case] expected: f64) {
        assert_eq!(safe_div(numerator, denominator), expected);
    }

    #[test]
    fn zero_denominators_become_zero() {
        let numerator = array![1., 0., -2., 6.];
        let denominator = array![0., 0., 0., 3.];
        let quotient = safe_divide(&numerator, &denominator);
        assert_eq!(quotient, array![0., 0., 0., 2.]);
        assert!(quotient.iter().all(|value| value.is_finite()));
    }

    #[test]
    fn ndvi_of_sample_columns() {
        let red = array![0.1, 0.2];
        let nir = array![0.3, 0.1];
        let ndvi = normalized_difference(&red, &nir);
        assert!((ndvi[0] - 0.5).abs() < 1e-12);
        assert!((ndvi[1] + 1. / 3.).abs() < 1e-12);
    }

    #[test]
    fn normalized_difference_is_total() {
        let a = array![0., 1., -1., 2.5, 0.];
        let b = array![0., -1., 1., 2.5, 4.];
        let index = normalized_difference(&a, &b);
        assert_eq!(index[0], 0.);
        assert_eq!(index[1], 0.);
        assert_eq!(index[2], 0.);
        assert_eq!(index[3], 0.);
        assert_eq!(index[4], 1.);
        assert!(index.iter().all(|value| value.is_finite()));
    }
}
