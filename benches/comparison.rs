use criterion::{criterion_group, criterion_main, Criterion};

// ---------------------------------------------------------------------------
// Helpers: well-conditioned test matrices, same entries for both libraries
// ---------------------------------------------------------------------------

fn entry(i: usize, j: usize, n: usize) -> f64 {
    ((i + 1) * 10 + j + 1) as f64 + if i == j { 10.0 * n as f64 } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

fn det_3x3(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_3x3");

    g.bench_function("cofactor", |b| {
        let a: cofactor::Matrix3 = cofactor::Matrix3::from_fn(|i, j| entry(i, j, 3));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix3::from_fn(|i, j| entry(i, j, 3));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

fn det_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_4x4");

    g.bench_function("cofactor", |b| {
        let a: cofactor::Matrix4 = cofactor::Matrix4::from_fn(|i, j| entry(i, j, 4));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix4::from_fn(|i, j| entry(i, j, 4));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

fn det_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_6x6");

    g.bench_function("cofactor", |b| {
        let a: cofactor::Matrix6 = cofactor::Matrix6::from_fn(|i, j| entry(i, j, 6));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix6::from_fn(|i, j| entry(i, j, 6));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

fn det_8x8(c: &mut Criterion) {
    let mut g = c.benchmark_group("det_8x8");

    g.bench_function("cofactor", |b| {
        let a: cofactor::Matrix8 = cofactor::Matrix8::from_fn(|i, j| entry(i, j, 8));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::SMatrix::<f64, 8, 8>::from_fn(|i, j| entry(i, j, 8));
        b.iter(|| std::hint::black_box(&a).determinant())
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Submatrix extraction
// ---------------------------------------------------------------------------

fn submatrix_6x6(c: &mut Criterion) {
    let mut g = c.benchmark_group("submatrix_6x6");

    g.bench_function("cofactor", |b| {
        let a: cofactor::Matrix6 = cofactor::Matrix6::from_fn(|i, j| entry(i, j, 6));
        b.iter(|| std::hint::black_box(&a).submatrix(2, 3))
    });

    g.bench_function("cofactor_row0_sweep", |b| {
        let a: cofactor::Matrix6 = cofactor::Matrix6::from_fn(|i, j| entry(i, j, 6));
        b.iter(|| {
            let a = std::hint::black_box(&a);
            (0..6).map(|j| a.submatrix(0, j).trace()).sum::<f64>()
        })
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

fn inverse_4x4(c: &mut Criterion) {
    let mut g = c.benchmark_group("inverse_4x4");

    g.bench_function("cofactor", |b| {
        let a: cofactor::Matrix4 = cofactor::Matrix4::from_fn(|i, j| entry(i, j, 4));
        b.iter(|| std::hint::black_box(&a).inverse())
    });

    g.bench_function("nalgebra", |b| {
        let a = nalgebra::Matrix4::from_fn(|i, j| entry(i, j, 4));
        b.iter(|| std::hint::black_box(&a).try_inverse())
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    det_3x3,
    det_4x4,
    det_6x6,
    det_8x8,
    submatrix_6x6,
    inverse_4x4,
);
criterion_main!(benches);
