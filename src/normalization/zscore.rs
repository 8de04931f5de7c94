//! Z-score normalization.
//!
//! Transforms each feature to zero mean and unit variance:
//! ```text
//! z = (x - mean) / std_dev
//! ```
//! where `std_dev` is the population standard deviation (divisor `n`).
//!
//! # Example
//! ```
//! use column_normalizer::backend::{CpuBackend, Matrix};
//! use column_normalizer::normalization::{apply_z_score, compute_mean_and_std_dev};
//!
//! let train = Matrix::<CpuBackend>::from_rows(&[vec![1.0], vec![3.0], vec![5.0]]).unwrap();
//! let test = Matrix::<CpuBackend>::from_rows(&[vec![3.0], vec![7.0]]).unwrap();
//!
//! // Reuse training statistics on held-out data.
//! let (mean, std_dev) = compute_mean_and_std_dev(&train).unwrap();
//! let scaled = apply_z_score(&test, &mean, &std_dev).unwrap();
//! assert_eq!(scaled.get(0, 0), Some(0.0));
//! ```

use super::warn_degenerate_columns;
use crate::backend::{Backend, ColumnVector, Matrix};
use crate::error::NormalizationError;
use log::debug;

/// Computes the per-column mean and population standard deviation.
///
/// A constant column gets a standard deviation of exactly zero.
///
/// # Errors
/// [`NormalizationError::EmptyData`] if the matrix has no rows or no columns.
pub fn compute_mean_and_std_dev<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<(ColumnVector<B>, ColumnVector<B>), NormalizationError> {
    matrix.ensure_non_empty("z-score normalization")?;

    let mean = ColumnVector::from_raw(B::col_mean_2d(&matrix.data));
    let std_dev = ColumnVector::from_raw(B::col_std_2d(&matrix.data, 0));
    Ok((mean, std_dev))
}

/// Applies `(x - mean[j]) / std_dev[j]` to every element of column `j`.
///
/// Columns with zero standard deviation produce NaN (for values equal to the
/// mean) or infinity.
///
/// # Errors
/// [`NormalizationError::FeatureMismatch`] if `mean` or `std_dev` does not
/// have one entry per column.
pub fn apply_z_score<B: Backend>(
    matrix: &Matrix<B>,
    mean: &ColumnVector<B>,
    std_dev: &ColumnVector<B>,
) -> Result<Matrix<B>, NormalizationError> {
    matrix.ensure_features(mean)?;
    matrix.ensure_features(std_dev)?;
    debug!("Applying z-score to {:?} matrix", matrix.shape());
    warn_degenerate_columns("z-score", "standard deviation", std_dev);

    let centered = B::broadcast_sub_1d_to_2d_rows(&matrix.data, &mean.data);
    Ok(Matrix::from_raw(B::broadcast_div_1d_to_2d_rows(
        &centered,
        &std_dev.data,
    )))
}

/// Z-score normalizes a matrix with its own statistics.
///
/// Equivalent to [`compute_mean_and_std_dev`] followed by [`apply_z_score`].
pub fn normalize_with_z_score<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<Matrix<B>, NormalizationError> {
    let (mean, std_dev) = compute_mean_and_std_dev(matrix)?;
    apply_z_score(matrix, &mean, &std_dev)
}

/// Maps z-scores back to the original scale: `z * std_dev[j] + mean[j]`.
///
/// # Errors
/// [`NormalizationError::FeatureMismatch`] on a statistic length mismatch.
pub fn invert_z_score<B: Backend>(
    matrix: &Matrix<B>,
    mean: &ColumnVector<B>,
    std_dev: &ColumnVector<B>,
) -> Result<Matrix<B>, NormalizationError> {
    matrix.ensure_features(mean)?;
    matrix.ensure_features(std_dev)?;

    let scaled = B::broadcast_mul_1d_to_2d_rows(&matrix.data, &std_dev.data);
    Ok(Matrix::from_raw(B::broadcast_add_1d_to_2d_rows(
        &scaled,
        &mean.data,
    )))
}
