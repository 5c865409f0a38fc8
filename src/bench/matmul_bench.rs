//! Sequential vs row-banded multiply at a few sizes and thread counts.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rowmul::threaded::row_band_mt::matmul_row_band_mt;
use rowmul::{Matrix, matmul_naive_ijk};

fn patterned(n: usize) -> Matrix {
    Matrix::from_vec(n, (0..(n * n) as i32).map(|i| i % 100).collect())
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for n in [64, 128, 256] {
        let a = patterned(n);
        let b = patterned(n);
        // multiply-adds per product
        group.throughput(Throughput::Elements((n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("naive_ijk", n), &n, |bench, _| {
            bench.iter(|| matmul_naive_ijk(black_box(&a), black_box(&b)))
        });

        for threads in [1, 2, 4, 8] {
            let id = BenchmarkId::new(format!("row_band_mt/{}", threads), n);
            group.bench_with_input(id, &threads, |bench, &threads| {
                bench.iter(|| matmul_row_band_mt(black_box(&a), black_box(&b), threads))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
