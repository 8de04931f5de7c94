use super::quantile::column_quantile;
use super::Backend;
use crate::error::NormalizationError;
use ndarray::{Array1, Array2, Axis};

/// Backend implementation using the `ndarray` crate.
///
/// # Type mappings
/// - `Tensor1D`: `ndarray::Array1<f64>`
/// - `Tensor2D`: [`NdarrayTensor2D`], a wrapper around `ndarray::Array2<f64>`
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

/// Wrapper type for 2D tensors using ndarray's `Array2<f64>`.
///
/// # Example
/// ```
/// use column_normalizer::backend::NdarrayTensor2D;
/// use ndarray::array;
///
/// let tensor = NdarrayTensor2D::from(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!(tensor.0.shape(), &[2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl From<Array2<f64>> for NdarrayTensor2D {
    fn from(a: Array2<f64>) -> Self {
        NdarrayTensor2D(a)
    }
}

impl Backend for NdarrayBackend {
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    fn from_vec_2d(
        data: Vec<f64>,
        rows: usize,
        cols: usize,
    ) -> Result<Self::Tensor2D, NormalizationError> {
        let len = data.len();
        Array2::from_shape_vec((rows, cols), data)
            .map(NdarrayTensor2D)
            .map_err(|_| NormalizationError::InvalidShape {
                expected: format!("{} values for ({}, {})", rows * cols, rows, cols),
                got: format!("{} values", len),
            })
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    // Logical (row-major) order regardless of memory layout.
    fn to_vec_2d(t: &Self::Tensor2D) -> Vec<f64> {
        t.0.iter().copied().collect()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    fn get_2d(t: &Self::Tensor2D, row: usize, col: usize) -> f64 {
        t.0[[row, col]]
    }

    fn column_2d(t: &Self::Tensor2D, col: usize) -> Self::Tensor1D {
        t.0.column(col).to_owned()
    }

    fn count_2d<F: Fn(f64) -> bool>(t: &Self::Tensor2D, pred: F) -> usize {
        t.0.iter().filter(|&&x| pred(x)).count()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn log10_2d(t: &Self::Tensor2D) -> Self::Tensor2D {
        NdarrayTensor2D(t.0.mapv(f64::log10))
    }

    fn exp10_2d(t: &Self::Tensor2D) -> Self::Tensor2D {
        NdarrayTensor2D(t.0.mapv(|x| 10f64.powf(x)))
    }

    // --- Column-wise operations ---

    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.0.mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::from_elem(t.0.ncols(), f64::NAN))
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        t.0.std_axis(Axis(0), ddof as f64)
    }

    fn col_min_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.0.fold_axis(Axis(0), f64::INFINITY, |acc, &x| acc.min(x))
    }

    fn col_max_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.0.fold_axis(Axis(0), f64::NEG_INFINITY, |acc, &x| acc.max(x))
    }

    fn col_quantile_2d(t: &Self::Tensor2D, q: f64) -> Self::Tensor1D {
        t.0.columns()
            .into_iter()
            .map(|col| column_quantile(col.iter().copied(), q))
            .collect()
    }

    // --- Broadcasting operations ---

    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 - &v.view().insert_axis(Axis(0)))
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 / &v.view().insert_axis(Axis(0)))
    }

    fn broadcast_mul_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 * &v.view().insert_axis(Axis(0)))
    }

    fn broadcast_add_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 + &v.view().insert_axis(Axis(0)))
    }
}
