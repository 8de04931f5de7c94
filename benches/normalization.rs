use column_normalizer::backend::{CpuBackend, Matrix};
use column_normalizer::normalization::{
    normalize_with_log_scaling, normalize_with_min_max, normalize_with_robust_scaling,
    normalize_with_z_score,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic positive (rows x 8) matrix resembling housing features.
fn make_matrix(rows: usize) -> Matrix<CpuBackend> {
    let cols = 8;
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| 1.0 + ((i * 7919) % 1000) as f64 * 0.37 + (i % cols) as f64 * 10.0)
        .collect();
    Matrix::new(data, rows, cols).expect("Failed to build benchmark matrix")
}

fn bench_z_score(c: &mut Criterion) {
    for rows in [100, 1000, 10000].iter() {
        let m = make_matrix(*rows);
        c.bench_with_input(BenchmarkId::new("z_score", rows), &m, |b, m| {
            b.iter(|| black_box(normalize_with_z_score(black_box(m)).unwrap()));
        });
    }
}

fn bench_min_max(c: &mut Criterion) {
    for rows in [100, 1000, 10000].iter() {
        let m = make_matrix(*rows);
        c.bench_with_input(BenchmarkId::new("min_max", rows), &m, |b, m| {
            b.iter(|| black_box(normalize_with_min_max(black_box(m)).unwrap()));
        });
    }
}

fn bench_log_scaling(c: &mut Criterion) {
    for rows in [100, 1000, 10000].iter() {
        let m = make_matrix(*rows);
        c.bench_with_input(BenchmarkId::new("log_scaling", rows), &m, |b, m| {
            b.iter(|| black_box(normalize_with_log_scaling(black_box(m)).unwrap()));
        });
    }
}

fn bench_robust_scaling(c: &mut Criterion) {
    // Sorting dominates here
    for rows in [100, 1000, 10000].iter() {
        let m = make_matrix(*rows);
        c.bench_with_input(BenchmarkId::new("robust_scaling", rows), &m, |b, m| {
            b.iter(|| black_box(normalize_with_robust_scaling(black_box(m)).unwrap()));
        });
    }
}

criterion_group!(
    benches,
    bench_z_score,
    bench_min_max,
    bench_log_scaling,
    bench_robust_scaling
);
criterion_main!(benches);
