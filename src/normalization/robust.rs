//! Robust scaling.
//!
//! Scales features using statistics that are robust to outliers, the median
//! and the interquartile range (IQR):
//! ```text
//! X_scaled = (X - median) / (Q3 - Q1)
//! ```
//!
//! Quantiles are linearly interpolated between closest ranks: the `p`-quantile
//! of a sorted column `x[0..n]` sits at position `p * (n - 1)`. The same
//! definition is used for Q1, the median and Q3, so for `[1, 2, 3, 4, 5]`
//! they are 2, 3 and 4.
//!
//! # Example
//! ```
//! use column_normalizer::backend::{CpuBackend, Matrix};
//! use column_normalizer::normalization::normalize_with_robust_scaling;
//!
//! let m = Matrix::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], 5, 1).unwrap();
//! let scaled = normalize_with_robust_scaling(&m).unwrap();
//! assert_eq!(scaled.to_vec(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
//! ```

use super::warn_degenerate_columns;
use crate::backend::{Backend, ColumnVector, Matrix};
use crate::error::NormalizationError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Configuration for robust scaling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobustScalingConfig {
    /// Percentiles bounding the spread, default (25.0, 75.0).
    pub quantile_range: (f64, f64),
}

impl Default for RobustScalingConfig {
    fn default() -> Self {
        Self {
            quantile_range: (25.0, 75.0),
        }
    }
}

impl RobustScalingConfig {
    /// Creates a configuration with a custom percentile range.
    ///
    /// # Errors
    /// [`NormalizationError::InvalidParameter`] unless `0 <= low < high <= 100`.
    pub fn new(low: f64, high: f64) -> Result<Self, NormalizationError> {
        let config = Self {
            quantile_range: (low, high),
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the range satisfies `0 <= low < high <= 100`.
    pub fn validate(&self) -> Result<(), NormalizationError> {
        let (low, high) = self.quantile_range;
        if !((0.0..=100.0).contains(&low) && (0.0..=100.0).contains(&high) && low < high) {
            return Err(NormalizationError::InvalidParameter(format!(
                "Invalid quantile range ({}, {}): must be 0 <= low < high <= 100",
                low, high
            )));
        }
        Ok(())
    }
}

fn column_quantile<B: Backend>(matrix: &Matrix<B>, percentile: f64) -> ColumnVector<B> {
    ColumnVector::from_raw(B::col_quantile_2d(&matrix.data, percentile / 100.0))
}

/// Computes the per-column first quartile, median and third quartile.
///
/// # Errors
/// [`NormalizationError::EmptyData`] if the matrix has no rows or no columns.
pub fn compute_quartiles<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<(ColumnVector<B>, ColumnVector<B>, ColumnVector<B>), NormalizationError> {
    matrix.ensure_non_empty("robust scaling")?;
    Ok((
        column_quantile(matrix, 25.0),
        column_quantile(matrix, 50.0),
        column_quantile(matrix, 75.0),
    ))
}

/// Computes the per-column median and interquartile range (Q3 - Q1).
pub fn compute_median_and_iqr<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<(ColumnVector<B>, ColumnVector<B>), NormalizationError> {
    compute_median_and_iqr_with(matrix, &RobustScalingConfig::default())
}

/// Computes the per-column median and the spread between the configured
/// percentiles.
///
/// # Errors
/// [`NormalizationError::InvalidParameter`] for an invalid range,
/// [`NormalizationError::EmptyData`] for an empty matrix.
pub fn compute_median_and_iqr_with<B: Backend>(
    matrix: &Matrix<B>,
    config: &RobustScalingConfig,
) -> Result<(ColumnVector<B>, ColumnVector<B>), NormalizationError> {
    config.validate()?;
    matrix.ensure_non_empty("robust scaling")?;

    let (low, high) = config.quantile_range;
    let median = column_quantile(matrix, 50.0);
    let iqr = column_quantile(matrix, high).sub(&column_quantile(matrix, low));
    Ok((median, iqr))
}

/// Applies `(x - median[j]) / iqr[j]` to every element of column `j`.
///
/// A zero IQR yields NaN or infinity.
///
/// # Errors
/// [`NormalizationError::FeatureMismatch`] on a statistic length mismatch.
pub fn apply_robust_scaling<B: Backend>(
    matrix: &Matrix<B>,
    median: &ColumnVector<B>,
    iqr: &ColumnVector<B>,
) -> Result<Matrix<B>, NormalizationError> {
    matrix.ensure_features(median)?;
    matrix.ensure_features(iqr)?;
    debug!("Applying robust scaling to {:?} matrix", matrix.shape());
    warn_degenerate_columns("robust scaling", "IQR", iqr);

    let centered = B::broadcast_sub_1d_to_2d_rows(&matrix.data, &median.data);
    Ok(Matrix::from_raw(B::broadcast_div_1d_to_2d_rows(
        &centered, &iqr.data,
    )))
}

/// Robust-scales a matrix with its own median and IQR.
pub fn normalize_with_robust_scaling<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<Matrix<B>, NormalizationError> {
    normalize_with_robust_scaling_config(matrix, &RobustScalingConfig::default())
}

/// Robust-scales a matrix using a custom percentile range for the spread.
pub fn normalize_with_robust_scaling_config<B: Backend>(
    matrix: &Matrix<B>,
    config: &RobustScalingConfig,
) -> Result<Matrix<B>, NormalizationError> {
    let (median, iqr) = compute_median_and_iqr_with(matrix, config)?;
    apply_robust_scaling(matrix, &median, &iqr)
}

/// Maps robust-scaled values back: `x * iqr[j] + median[j]`.
///
/// # Errors
/// [`NormalizationError::FeatureMismatch`] on a statistic length mismatch.
pub fn invert_robust_scaling<B: Backend>(
    matrix: &Matrix<B>,
    median: &ColumnVector<B>,
    iqr: &ColumnVector<B>,
) -> Result<Matrix<B>, NormalizationError> {
    matrix.ensure_features(median)?;
    matrix.ensure_features(iqr)?;

    let scaled = B::broadcast_mul_1d_to_2d_rows(&matrix.data, &iqr.data);
    Ok(Matrix::from_raw(B::broadcast_add_1d_to_2d_rows(
        &scaled,
        &median.data,
    )))
}
