//! # column-normalizer
//!
//! Column-wise statistical normalization for tabular data: z-score, min-max,
//! base-10 log scaling and robust (median/IQR) scaling over a 2-D matrix
//! whose rows are samples and whose columns are features.
//!
//! ## Design
//!
//! - **Pure transforms**: every function reads a [`Matrix`] and returns a new
//!   one of the same shape. Nothing is mutated and nothing is cached.
//! - **Reusable statistics**: `compute_*` functions return per-column
//!   [`ColumnVector`]s that the matching `apply_*` function accepts, so
//!   statistics from training data can be applied to held-out data.
//! - **Backend agnostic**: [`Matrix`] and [`ColumnVector`] are generic over a
//!   [`Backend`]; `CpuBackend` is pure Rust, `NdarrayBackend` (feature
//!   `ndarray`) stores `ndarray` arrays.
//! - **IEEE semantics for numeric edge cases**: constant columns and
//!   non-positive log inputs give NaN or infinity, not errors. Only shape
//!   problems produce a [`NormalizationError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use column_normalizer::backend::{CpuBackend, Matrix};
//! use column_normalizer::normalization::{compute_mean_and_std_dev, normalize_with_z_score};
//!
//! let x = Matrix::<CpuBackend>::from_rows(&[
//!     vec![1.0, 2.0],
//!     vec![3.0, 4.0],
//!     vec![5.0, 6.0],
//! ])
//! .unwrap();
//!
//! let (mean, _std_dev) = compute_mean_and_std_dev(&x).unwrap();
//! assert_eq!(mean.to_vec(), vec![3.0, 4.0]);
//!
//! let z = normalize_with_z_score(&x).unwrap();
//! assert_eq!(z.get(1, 0), Some(0.0));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `debug`
//! on each transform, `warn` when a column is degenerate. Install any logger
//! to see them.

pub mod backend;

/// Error type shared by all operations.
pub mod error;

/// Z-score, min-max, log and robust scaling transforms.
pub mod normalization;

pub use backend::{Backend, ColumnVector, Matrix};
#[cfg(feature = "cpu")]
pub use backend::CpuBackend;
#[cfg(feature = "ndarray")]
pub use backend::NdarrayBackend;
pub use error::NormalizationError;
pub use normalization::{
    apply_z_score, compute_mean_and_std_dev, normalize, normalize_with_log_scaling,
    normalize_with_min_max, normalize_with_robust_scaling, normalize_with_z_score,
    NormalizationMethod,
};
