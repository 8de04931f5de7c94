use crate::backend::Backend;
use std::fmt;
use std::marker::PhantomData;

/// Backend-typed per-column statistic (mean, standard deviation, min, max,
/// median, quartile bound or IQR).
///
/// A `ColumnVector` holds one value per feature column of the matrix it was
/// computed from. It can also be built by hand to reapply statistics learned
/// on training data to held-out data.
///
/// # Type safety
/// ```compile_fail
/// use column_normalizer::backend::{ColumnVector, CpuBackend, Matrix, NdarrayBackend};
/// use column_normalizer::normalization::apply_z_score;
///
/// let m = Matrix::<CpuBackend>::from_rows(&[vec![1.0]]).unwrap();
/// let mean = ColumnVector::<NdarrayBackend>::new(vec![0.0]);
/// let std = ColumnVector::<NdarrayBackend>::new(vec![1.0]);
/// let _ = apply_z_score(&m, &mean, &std); // mismatched backends
/// ```
///
/// # Example
/// ```
/// use column_normalizer::backend::{ColumnVector, CpuBackend};
///
/// let mean = ColumnVector::<CpuBackend>::new(vec![3.0, 4.0]);
/// assert_eq!(mean.len(), 2);
/// assert_eq!(mean.get(1), Some(4.0));
/// ```
#[derive(Clone)]
pub struct ColumnVector<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> ColumnVector<B> {
    /// Creates a column vector from one value per feature.
    pub fn new(values: Vec<f64>) -> Self {
        Self::from_raw(B::from_vec_1d(values))
    }

    pub(crate) fn from_raw(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value for feature `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<f64> {
        B::to_vec_1d(&self.data).get(index).copied()
    }

    /// Element-wise `self - other`.
    ///
    /// # Panics
    /// If the vectors have different lengths.
    pub fn sub(&self, other: &Self) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "Column vectors must have the same length"
        );
        Self::from_raw(B::sub_1d(&self.data, &other.data))
    }

    /// Copies the values into a `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }
}

impl<B: Backend> fmt::Debug for ColumnVector<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ColumnVector").field(&self.to_vec()).finish()
    }
}
