//! Min-max normalization.
//!
//! Linearly rescales each feature to the [0, 1] range:
//! ```text
//! X_scaled = (X - min) / (max - min)
//! ```
//! A constant column has `max == min` and yields NaN.

use super::warn_degenerate_columns;
use crate::backend::{Backend, ColumnVector, Matrix};
use crate::error::NormalizationError;
use log::debug;

/// Computes the per-column minimum and maximum.
///
/// NaN entries are skipped; a column made only of NaN gets `min = +inf`
/// and `max = -inf`.
///
/// # Errors
/// [`NormalizationError::EmptyData`] if the matrix has no rows or no columns.
pub fn compute_min_and_max<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<(ColumnVector<B>, ColumnVector<B>), NormalizationError> {
    matrix.ensure_non_empty("min-max normalization")?;

    let min = ColumnVector::from_raw(B::col_min_2d(&matrix.data));
    let max = ColumnVector::from_raw(B::col_max_2d(&matrix.data));
    Ok((min, max))
}

/// Applies `(x - min[j]) / (max[j] - min[j])` to every element of column `j`.
///
/// # Errors
/// [`NormalizationError::FeatureMismatch`] on a statistic length mismatch.
pub fn apply_min_max<B: Backend>(
    matrix: &Matrix<B>,
    min: &ColumnVector<B>,
    max: &ColumnVector<B>,
) -> Result<Matrix<B>, NormalizationError> {
    matrix.ensure_features(min)?;
    matrix.ensure_features(max)?;
    debug!("Applying min-max to {:?} matrix", matrix.shape());

    let range = max.sub(min);
    warn_degenerate_columns("min-max", "range", &range);

    let shifted = B::broadcast_sub_1d_to_2d_rows(&matrix.data, &min.data);
    Ok(Matrix::from_raw(B::broadcast_div_1d_to_2d_rows(
        &shifted,
        &range.data,
    )))
}

/// Min-max normalizes a matrix with its own column bounds.
///
/// # Example
/// ```
/// use column_normalizer::backend::{CpuBackend, Matrix};
/// use column_normalizer::normalization::normalize_with_min_max;
///
/// let m = Matrix::<CpuBackend>::from_rows(&[vec![1.0], vec![3.0], vec![5.0]]).unwrap();
/// let scaled = normalize_with_min_max(&m).unwrap();
/// assert_eq!(scaled.to_vec(), vec![0.0, 0.5, 1.0]);
/// ```
pub fn normalize_with_min_max<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<Matrix<B>, NormalizationError> {
    let (min, max) = compute_min_and_max(matrix)?;
    apply_min_max(matrix, &min, &max)
}

/// Maps [0, 1]-scaled values back: `x * (max[j] - min[j]) + min[j]`.
///
/// # Errors
/// [`NormalizationError::FeatureMismatch`] on a statistic length mismatch.
pub fn invert_min_max<B: Backend>(
    matrix: &Matrix<B>,
    min: &ColumnVector<B>,
    max: &ColumnVector<B>,
) -> Result<Matrix<B>, NormalizationError> {
    matrix.ensure_features(min)?;
    matrix.ensure_features(max)?;

    let range = max.sub(min);
    let stretched = B::broadcast_mul_1d_to_2d_rows(&matrix.data, &range.data);
    Ok(Matrix::from_raw(B::broadcast_add_1d_to_2d_rows(
        &stretched,
        &min.data,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    fn create_test_data() -> Matrix<CpuBackend> {
        Matrix::from_rows(&[
            vec![1.0, -10.0],
            vec![3.0, 30.0],
            vec![5.0, 10.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_compute_min_and_max() {
        let (min, max) = compute_min_and_max(&create_test_data()).unwrap();
        assert_eq!(min.to_vec(), vec![1.0, -10.0]);
        assert_eq!(max.to_vec(), vec![5.0, 30.0]);
    }

    #[test]
    fn test_normalize_with_min_max_values() {
        let result = normalize_with_min_max(&create_test_data()).unwrap();
        assert_eq!(
            result.to_rows(),
            vec![vec![0.0, 0.0], vec![0.5, 1.0], vec![1.0, 0.5]]
        );
    }

    #[test]
    fn test_output_bounds_are_exact() {
        let data = Matrix::<CpuBackend>::from_rows(&[
            vec![0.3, 17.0],
            vec![-2.7, 4.0],
            vec![9.1, 11.0],
            vec![1.4, -6.0],
        ])
        .unwrap();
        let result = normalize_with_min_max(&data).unwrap();
        let (min, max) = compute_min_and_max(&result).unwrap();

        assert_eq!(min.to_vec(), vec![0.0, 0.0]);
        assert_eq!(max.to_vec(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_constant_column_produces_nan() {
        let data = Matrix::<CpuBackend>::from_rows(&[vec![2.0, 1.0], vec![2.0, 3.0]]).unwrap();
        let result = normalize_with_min_max(&data).unwrap();

        assert!(result.get(0, 0).unwrap().is_nan());
        assert!(result.get(1, 0).unwrap().is_nan());
        assert_eq!(result.column(1).unwrap().to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_apply_min_max_to_held_out_data() {
        let min = ColumnVector::<CpuBackend>::new(vec![0.0]);
        let max = ColumnVector::<CpuBackend>::new(vec![10.0]);
        let test = Matrix::<CpuBackend>::from_rows(&[vec![5.0], vec![20.0], vec![-5.0]]).unwrap();

        // Values outside the training range map outside [0, 1].
        let result = apply_min_max(&test, &min, &max).unwrap();
        assert_eq!(result.to_vec(), vec![0.5, 2.0, -0.5]);
    }

    #[test]
    fn test_apply_min_max_feature_mismatch() {
        let data = create_test_data();
        let min = ColumnVector::<CpuBackend>::new(vec![0.0, 0.0]);
        let max = ColumnVector::<CpuBackend>::new(vec![1.0]);

        assert!(matches!(
            apply_min_max(&data, &min, &max),
            Err(NormalizationError::FeatureMismatch {
                expected_features: 2,
                got_features: 1
            })
        ));
    }

    #[test]
    fn test_empty_data() {
        let data = Matrix::<CpuBackend>::new(vec![], 0, 1).unwrap();
        assert!(normalize_with_min_max(&data).is_err());
    }

    #[test]
    fn test_invert_min_max() {
        let data = create_test_data();
        let (min, max) = compute_min_and_max(&data).unwrap();
        let scaled = apply_min_max(&data, &min, &max).unwrap();
        let recovered = invert_min_max(&scaled, &min, &max).unwrap();

        for (o, r) in data.to_vec().iter().zip(recovered.to_vec().iter()) {
            assert!((o - r).abs() < 1e-12, "Expected {}, got {}", o, r);
        }
    }
}
