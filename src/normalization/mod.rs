//! Column-wise normalization transforms.
//!
//! Every transform treats columns independently: statistics are computed per
//! column across all rows, and the input matrix is never modified.
//!
//! | Transform | Formula | Statistics |
//! |-----------|---------|------------|
//! | Z-score | `(x - mean) / std_dev` | [`compute_mean_and_std_dev`] |
//! | Min-max | `(x - min) / (max - min)` | [`compute_min_and_max`] |
//! | Log scaling | `log10(x)` | none |
//! | Robust scaling | `(x - median) / (Q3 - Q1)` | [`compute_median_and_iqr`] |
//!
//! Each `normalize_with_*` function uses the matrix's own statistics. The
//! `compute_*` / `apply_*` pairs split that in two so statistics learned on
//! training data can be reapplied to held-out data, and the `invert_*`
//! functions map scaled values back to original units.
//!
//! Degenerate statistics (a constant column, a zero IQR) are not guarded:
//! the affected column comes out as NaN or infinity and a warning is logged.

mod logscale;
mod method;
mod minmax;
mod robust;
mod zscore;

pub use logscale::{invert_log_scaling, normalize_with_log_scaling};
pub use method::{normalize, NormalizationMethod};
pub use minmax::{apply_min_max, compute_min_and_max, invert_min_max, normalize_with_min_max};
pub use robust::{
    apply_robust_scaling, compute_median_and_iqr, compute_median_and_iqr_with,
    compute_quartiles, invert_robust_scaling, normalize_with_robust_scaling,
    normalize_with_robust_scaling_config, RobustScalingConfig,
};
pub use zscore::{apply_z_score, compute_mean_and_std_dev, invert_z_score, normalize_with_z_score};

use crate::backend::{Backend, ColumnVector};

/// Logs a warning naming every column whose divisor statistic is zero.
fn warn_degenerate_columns<B: Backend>(transform: &str, statistic: &str, divisor: &ColumnVector<B>) {
    let zero_columns: Vec<usize> = divisor
        .to_vec()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == 0.0)
        .map(|(j, _)| j)
        .collect();

    if !zero_columns.is_empty() {
        log::warn!(
            "{}: zero {} in column(s) {:?}; output will contain NaN or infinity",
            transform,
            statistic,
            zero_columns
        );
    }
}
