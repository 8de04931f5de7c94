use super::quantile::column_quantile;
use super::Backend;
use crate::error::NormalizationError;

/// Dependency-free backend storing matrices as row-major `Vec<f64>`.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major matrix storage: `(data, rows, cols)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        CpuTensor2D(self.0.iter().map(|&x| f(x)).collect(), self.1, self.2)
    }

    fn zip_rows(&self, v: &[f64], f: impl Fn(f64, f64) -> f64) -> Self {
        let cols = self.2;
        let data = self
            .0
            .iter()
            .enumerate()
            .map(|(i, &x)| f(x, v[i % cols]))
            .collect();
        CpuTensor2D(data, self.1, cols)
    }

    fn column_iter(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().skip(col).step_by(self.2.max(1)).copied()
    }

    fn fold_columns(&self, init: f64, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
        let mut acc = vec![init; self.2];
        for row in self.0.chunks(self.2.max(1)) {
            for (a, &x) in acc.iter_mut().zip(row.iter()) {
                *a = f(*a, x);
            }
        }
        acc
    }
}

impl Backend for CpuBackend {
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    // --- Constructors ---
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn from_vec_2d(
        data: Vec<f64>,
        rows: usize,
        cols: usize,
    ) -> Result<Self::Tensor2D, NormalizationError> {
        if data.len() != rows * cols {
            return Err(NormalizationError::InvalidShape {
                expected: format!("{} values for ({}, {})", rows * cols, rows, cols),
                got: format!("{} values", data.len()),
            });
        }
        Ok(CpuTensor2D(data, rows, cols))
    }

    // --- Access ---
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn to_vec_2d(t: &Self::Tensor2D) -> Vec<f64> {
        t.0.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }

    fn get_2d(t: &Self::Tensor2D, row: usize, col: usize) -> f64 {
        t.0[row * t.2 + col]
    }

    fn column_2d(t: &Self::Tensor2D, col: usize) -> Self::Tensor1D {
        t.column_iter(col).collect()
    }

    fn count_2d<F: Fn(f64) -> bool>(t: &Self::Tensor2D, pred: F) -> usize {
        t.0.iter().filter(|&&x| pred(x)).count()
    }

    // --- Element-wise ops ---
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn log10_2d(t: &Self::Tensor2D) -> Self::Tensor2D {
        t.map(f64::log10)
    }

    fn exp10_2d(t: &Self::Tensor2D) -> Self::Tensor2D {
        t.map(|x| 10f64.powf(x))
    }

    // --- Column reductions ---
    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        let n = t.1 as f64;
        t.fold_columns(0.0, |acc, x| acc + x)
            .into_iter()
            .map(|sum| sum / n)
            .collect()
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        let means = Self::col_mean_2d(t);
        let divisor = t.1 as f64 - ddof as f64;
        means
            .iter()
            .enumerate()
            .map(|(col, &mean)| {
                let var_sum: f64 = t.column_iter(col).map(|x| (x - mean) * (x - mean)).sum();
                (var_sum / divisor).sqrt()
            })
            .collect()
    }

    fn col_min_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.fold_columns(f64::INFINITY, f64::min)
    }

    fn col_max_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.fold_columns(f64::NEG_INFINITY, f64::max)
    }

    fn col_quantile_2d(t: &Self::Tensor2D, q: f64) -> Self::Tensor1D {
        (0..t.2)
            .map(|col| column_quantile(t.column_iter(col), q))
            .collect()
    }

    // --- Broadcasting ---
    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.zip_rows(v, |x, s| x - s)
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.zip_rows(v, |x, s| x / s)
    }

    fn broadcast_mul_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.zip_rows(v, |x, s| x * s)
    }

    fn broadcast_add_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.zip_rows(v, |x, s| x + s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // X = [[1.0, 2.0],
    //      [3.0, 4.0],
    //      [5.0, 6.0]]
    fn sample() -> CpuTensor2D {
        CpuBackend::from_vec_2d(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "Expected {}, got {}", e, a);
        }
    }

    #[test]
    fn test_from_vec_2d_rejects_wrong_length() {
        let result = CpuBackend::from_vec_2d(vec![1.0, 2.0, 3.0], 2, 2);
        assert!(matches!(
            result,
            Err(NormalizationError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_column_access() {
        let x = sample();
        assert_eq!(CpuBackend::shape(&x), (3, 2));
        assert_eq!(CpuBackend::get_2d(&x, 2, 1), 6.0);
        assert_eq!(CpuBackend::column_2d(&x, 0), vec![1.0, 3.0, 5.0]);
        assert_eq!(CpuBackend::column_2d(&x, 1), vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_col_mean_and_std() {
        let x = sample();
        assert_close(&CpuBackend::col_mean_2d(&x), &[3.0, 4.0]);

        // population variance of [1, 3, 5] is 8/3
        let expected = (8.0f64 / 3.0).sqrt();
        assert_close(&CpuBackend::col_std_2d(&x, 0), &[expected, expected]);

        // sample variance of [1, 3, 5] is 4
        assert_close(&CpuBackend::col_std_2d(&x, 1), &[2.0, 2.0]);
    }

    #[test]
    fn test_col_min_max() {
        let x = CpuBackend::from_vec_2d(vec![3.0, -1.0, -2.0, 7.0, 5.0, 0.0], 3, 2).unwrap();
        assert_eq!(CpuBackend::col_min_2d(&x), vec![-2.0, -1.0]);
        assert_eq!(CpuBackend::col_max_2d(&x), vec![5.0, 7.0]);
    }

    #[test]
    fn test_col_quantile() {
        let x = CpuBackend::from_vec_2d(
            vec![5.0, 10.0, 1.0, 20.0, 4.0, 30.0, 2.0, 40.0, 3.0, 50.0],
            5,
            2,
        )
        .unwrap();
        assert_close(&CpuBackend::col_quantile_2d(&x, 0.25), &[2.0, 20.0]);
        assert_close(&CpuBackend::col_quantile_2d(&x, 0.5), &[3.0, 30.0]);
        assert_close(&CpuBackend::col_quantile_2d(&x, 0.75), &[4.0, 40.0]);
    }

    #[test]
    fn test_broadcast_ops() {
        let x = sample();
        let v = vec![1.0, 2.0];

        let sub = CpuBackend::broadcast_sub_1d_to_2d_rows(&x, &v);
        assert_close(&sub.0, &[0.0, 0.0, 2.0, 2.0, 4.0, 4.0]);

        let div = CpuBackend::broadcast_div_1d_to_2d_rows(&x, &v);
        assert_close(&div.0, &[1.0, 1.0, 3.0, 2.0, 5.0, 3.0]);

        let mul = CpuBackend::broadcast_mul_1d_to_2d_rows(&x, &v);
        assert_close(&mul.0, &[1.0, 4.0, 3.0, 8.0, 5.0, 12.0]);

        let add = CpuBackend::broadcast_add_1d_to_2d_rows(&x, &v);
        assert_close(&add.0, &[2.0, 4.0, 4.0, 6.0, 6.0, 8.0]);
    }

    #[test]
    fn test_log10_and_exp10() {
        let x = CpuBackend::from_vec_2d(vec![1.0, 10.0, 100.0, 1000.0], 2, 2).unwrap();
        let logged = CpuBackend::log10_2d(&x);
        assert_close(&logged.0, &[0.0, 1.0, 2.0, 3.0]);

        let restored = CpuBackend::exp10_2d(&logged);
        for (a, e) in restored.0.iter().zip(x.0.iter()) {
            assert!((a - e).abs() < 1e-9, "Expected {}, got {}", e, a);
        }
    }

    #[test]
    fn test_count_2d() {
        let x = CpuBackend::from_vec_2d(vec![-1.0, 0.0, 2.0, 3.0], 2, 2).unwrap();
        assert_eq!(CpuBackend::count_2d(&x, |v| v <= 0.0), 2);
    }
}
