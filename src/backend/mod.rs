//! # Backend Abstraction
//!
//! Normalization transforms are written once against the [`Backend`] trait and
//! run unchanged on any storage implementation. A backend supplies a 1D and a
//! 2D tensor type plus the handful of column reductions and row broadcasts the
//! transforms are built from.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Storage                                  |
//! |------------------|-----------|------------------------------------------|
//! | `CpuBackend`     | `cpu`     | Row-major `Vec<f64>`, no dependencies     |
//! | `NdarrayBackend` | `ndarray` | `ndarray::Array2<f64>` / `Array1<f64>`    |
//!
//! Users normally never call backend functions directly; they work with
//! [`Matrix`] and [`ColumnVector`], which carry the backend as a type parameter
//! so that values from different backends cannot be mixed.
//!
//! ## Example
//!
//! ```rust
//! use column_normalizer::backend::{CpuBackend, Matrix};
//!
//! let m = Matrix::<CpuBackend>::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(m.shape(), (2, 2));
//! ```

use crate::error::NormalizationError;

#[cfg(feature = "cpu")]
mod cpu;
#[cfg(feature = "cpu")]
/// Pure-Rust CPU backend implementation with zero external dependencies.
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend backed by the `ndarray` crate for ecosystem interoperability.
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// Per-column statistic vector.
pub mod column;
/// Two-dimensional sample-by-feature matrix.
pub mod matrix;
pub(crate) mod quantile;

pub use column::ColumnVector;
pub use matrix::Matrix;

/// Abstraction over tensor storage and the column-wise primitives used by the
/// normalization transforms.
///
/// All 2D tensors are (rows x cols) with rows being samples and columns being
/// features. Every column reduction returns a 1D tensor of length `cols`.
///
/// # Shape contract
///
/// Implementations may assume that broadcast operands have one entry per
/// column and that indices are in bounds; [`Matrix`] and [`ColumnVector`]
/// validate shapes before delegating here.
///
/// # Numeric contract
///
/// Arithmetic follows IEEE 754: division by zero yields infinity or NaN and
/// is never reported as an error.
pub trait Backend: Clone + Copy + Send + Sync + 'static {
    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    /// Two-dimensional tensor type.
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Errors
    /// [`NormalizationError::InvalidShape`] if `data.len() != rows * cols`.
    fn from_vec_2d(
        data: Vec<f64>,
        rows: usize,
        cols: usize,
    ) -> Result<Self::Tensor2D, NormalizationError>;

    // --- Data access ---

    /// Copies a 1D tensor into a `Vec`.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Copies a 2D tensor into a row-major `Vec`.
    fn to_vec_2d(t: &Self::Tensor2D) -> Vec<f64>;

    /// Returns the number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Returns the shape of a 2D tensor as (rows, cols).
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    /// Returns the element at (`row`, `col`).
    fn get_2d(t: &Self::Tensor2D, row: usize, col: usize) -> f64;

    /// Copies column `col` into a 1D tensor.
    fn column_2d(t: &Self::Tensor2D, col: usize) -> Self::Tensor1D;

    /// Counts the elements of a 2D tensor satisfying `pred`.
    fn count_2d<F: Fn(f64) -> bool>(t: &Self::Tensor2D, pred: F) -> usize;

    // --- Element-wise operations ---

    /// Element-wise subtraction of two 1D tensors of equal length.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise base-10 logarithm.
    fn log10_2d(t: &Self::Tensor2D) -> Self::Tensor2D;

    /// Element-wise `10^x`.
    fn exp10_2d(t: &Self::Tensor2D) -> Self::Tensor2D;

    // --- Column-wise reductions ---

    /// Arithmetic mean of each column.
    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    /// Standard deviation of each column.
    ///
    /// `ddof` is the delta degrees of freedom: 0 for the population standard
    /// deviation, 1 for the sample standard deviation.
    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D;

    /// Minimum of each column.
    fn col_min_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    /// Maximum of each column.
    fn col_max_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    /// The `q`-quantile (`0.0 <= q <= 1.0`) of each column, linearly
    /// interpolated between closest ranks.
    fn col_quantile_2d(t: &Self::Tensor2D, q: f64) -> Self::Tensor1D;

    // --- Broadcasting operations ---

    /// Result[i, j] = t[i, j] - v[j]
    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// Result[i, j] = t[i, j] / v[j]
    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// Result[i, j] = t[i, j] * v[j]
    fn broadcast_mul_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// Result[i, j] = t[i, j] + v[j]
    fn broadcast_add_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;
}

#[cfg(all(test, feature = "cpu", feature = "ndarray"))]
mod tests {
    use super::*;

    // Both backends must produce identical statistics for the same data.
    fn assert_backends_agree(rows: &[Vec<f64>]) {
        let cpu = Matrix::<CpuBackend>::from_rows(rows).unwrap();
        let nd = Matrix::<NdarrayBackend>::from_rows(rows).unwrap();

        let pairs = [
            (
                CpuBackend::to_vec_1d(&CpuBackend::col_mean_2d(&cpu.data)),
                NdarrayBackend::to_vec_1d(&NdarrayBackend::col_mean_2d(&nd.data)),
            ),
            (
                CpuBackend::to_vec_1d(&CpuBackend::col_std_2d(&cpu.data, 0)),
                NdarrayBackend::to_vec_1d(&NdarrayBackend::col_std_2d(&nd.data, 0)),
            ),
            (
                CpuBackend::to_vec_1d(&CpuBackend::col_min_2d(&cpu.data)),
                NdarrayBackend::to_vec_1d(&NdarrayBackend::col_min_2d(&nd.data)),
            ),
            (
                CpuBackend::to_vec_1d(&CpuBackend::col_max_2d(&cpu.data)),
                NdarrayBackend::to_vec_1d(&NdarrayBackend::col_max_2d(&nd.data)),
            ),
            (
                CpuBackend::to_vec_1d(&CpuBackend::col_quantile_2d(&cpu.data, 0.25)),
                NdarrayBackend::to_vec_1d(&NdarrayBackend::col_quantile_2d(&nd.data, 0.25)),
            ),
        ];

        for (a, b) in pairs.iter() {
            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-12, "cpu={}, ndarray={}", x, y);
            }
        }
    }

    #[test]
    fn test_cpu_and_ndarray_statistics_agree() {
        assert_backends_agree(&[
            vec![1.0, -4.0, 10.0],
            vec![2.5, 8.0, 10.0],
            vec![7.0, 0.5, 10.0],
            vec![3.0, 2.0, 10.0],
        ]);
    }
}
