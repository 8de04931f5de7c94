//! Base-10 logarithmic scaling.
//!
//! Element-wise `log10(x)`. There are no learned statistics, so the same call
//! applies to training and held-out data alike. Non-positive inputs follow
//! IEEE 754: `log10(0) = -inf` and `log10(x < 0) = NaN`.

use crate::backend::{Backend, Matrix};
use crate::error::NormalizationError;
use log::{debug, warn};

/// Replaces every element with its base-10 logarithm.
///
/// # Example
/// ```
/// use column_normalizer::backend::{CpuBackend, Matrix};
/// use column_normalizer::normalization::normalize_with_log_scaling;
///
/// let m = Matrix::<CpuBackend>::from_rows(&[vec![10.0, 100.0], vec![1.0, 10.0]]).unwrap();
/// let scaled = normalize_with_log_scaling(&m).unwrap();
/// assert_eq!(scaled.to_rows(), vec![vec![1.0, 2.0], vec![0.0, 1.0]]);
/// ```
///
/// # Errors
/// [`NormalizationError::EmptyData`] if the matrix has no rows or no columns.
pub fn normalize_with_log_scaling<B: Backend>(
    matrix: &Matrix<B>,
) -> Result<Matrix<B>, NormalizationError> {
    matrix.ensure_non_empty("log scaling")?;
    debug!("Applying log10 scaling to {:?} matrix", matrix.shape());

    let non_positive = B::count_2d(&matrix.data, |x| x <= 0.0);
    if non_positive > 0 {
        warn!(
            "log scaling: {} non-positive value(s) will map to -inf or NaN",
            non_positive
        );
    }

    Ok(Matrix::from_raw(B::log10_2d(&matrix.data)))
}

/// Inverse of [`normalize_with_log_scaling`]: `10^x`.
pub fn invert_log_scaling<B: Backend>(matrix: &Matrix<B>) -> Result<Matrix<B>, NormalizationError> {
    Ok(Matrix::from_raw(B::exp10_2d(&matrix.data)))
}
