use super::column::ColumnVector;
use crate::backend::Backend;
use crate::error::NormalizationError;
use std::fmt;
use std::marker::PhantomData;

/// Backend-typed, immutable (samples x features) matrix.
///
/// Rows are samples and columns are features. Every transform in
/// [`crate::normalization`] reads a `Matrix` and returns a new one of the same
/// shape; there is no API to mutate a matrix in place.
///
/// # Example
/// ```
/// use column_normalizer::backend::{CpuBackend, Matrix};
///
/// let m = Matrix::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
/// assert_eq!(m.shape(), (3, 2));
/// assert_eq!(m.get(1, 0), Some(3.0));
/// assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
/// ```
#[derive(Clone)]
pub struct Matrix<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Matrix<B> {
    /// Builds a matrix from row-major `data`.
    ///
    /// # Errors
    /// [`NormalizationError::InvalidShape`] if `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self, NormalizationError> {
        Ok(Self::from_raw(B::from_vec_2d(data, rows, cols)?))
    }

    /// Builds a matrix from a slice of rows.
    ///
    /// An empty slice gives a (0 x 0) matrix.
    ///
    /// # Errors
    /// [`NormalizationError::InvalidShape`] if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, NormalizationError> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(NormalizationError::InvalidShape {
                expected: format!("{} values in every row", cols),
                got: format!("{} values in row {}", row.len(), i),
            });
        }
        let data: Vec<f64> = rows.iter().flat_map(|r| r.iter()).copied().collect();
        Self::new(data, rows.len(), cols)
    }

    pub(crate) fn from_raw(data: B::Tensor2D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Returns (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    /// Number of samples.
    pub fn nrows(&self) -> usize {
        self.shape().0
    }

    /// Number of features.
    pub fn ncols(&self) -> usize {
        self.shape().1
    }

    /// Element at (`row`, `col`), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let (rows, cols) = self.shape();
        (row < rows && col < cols).then(|| B::get_2d(&self.data, row, col))
    }

    /// Copy of feature column `col`, or `None` if out of bounds.
    pub fn column(&self, col: usize) -> Option<ColumnVector<B>> {
        (col < self.ncols()).then(|| ColumnVector::from_raw(B::column_2d(&self.data, col)))
    }

    /// Values in row-major order.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_2d(&self.data)
    }

    /// Values as a `Vec` of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        let cols = self.ncols();
        if cols == 0 {
            return vec![Vec::new(); self.nrows()];
        }
        self.to_vec().chunks(cols).map(<[f64]>::to_vec).collect()
    }

    /// Fails with [`NormalizationError::EmptyData`] unless the matrix has at
    /// least one row and one column.
    pub(crate) fn ensure_non_empty(&self, operation: &str) -> Result<(), NormalizationError> {
        let (rows, cols) = self.shape();
        if rows == 0 || cols == 0 {
            return Err(NormalizationError::EmptyData(format!(
                "Cannot apply {} to a ({}, {}) matrix",
                operation, rows, cols
            )));
        }
        Ok(())
    }

    /// Fails with [`NormalizationError::FeatureMismatch`] unless `stat` has one
    /// entry per column.
    pub(crate) fn ensure_features(&self, stat: &ColumnVector<B>) -> Result<(), NormalizationError> {
        let cols = self.ncols();
        if stat.len() != cols {
            return Err(NormalizationError::FeatureMismatch {
                expected_features: cols,
                got_features: stat.len(),
            });
        }
        Ok(())
    }
}

impl<B: Backend> fmt::Debug for Matrix<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("rows", &self.to_rows())
            .finish()
    }
}
