//! Quantiles by linear interpolation between closest ranks.
//!
//! For a sorted sample `x[0..n]` the `q`-quantile sits at fractional position
//! `h = q * (n - 1)` and is `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
//! The median is the 0.5-quantile, so for an even-length sample it is the mean
//! of the two middle values.

/// Sorts `values` ascending. NaN sorts after every number.
pub(crate) fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| a.total_cmp(b));
}

/// Returns the `q`-quantile of an ascending-sorted slice, or NaN if it is empty.
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }

    let pos = (q.clamp(0.0, 1.0) * (n - 1) as f64).min((n - 1) as f64);
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let frac = pos - lower as f64;

    if frac == 0.0 {
        sorted[lower]
    } else {
        sorted[lower] + frac * (sorted[upper] - sorted[lower])
    }
}

/// Sorts a copy of `column` and returns its `q`-quantile.
pub(crate) fn column_quantile(column: impl IntoIterator<Item = f64>, q: f64) -> f64 {
    let mut values: Vec<f64> = column.into_iter().collect();
    sort_ascending(&mut values);
    quantile_sorted(&values, q)
}
