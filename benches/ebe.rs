//! Elementwise Addition: Fast Path vs Generic Path
//!
//! Measures the cost of the cursor engine against the raw-array engine for
//! the same `plus` operation, with `ndarray` as an external reference.
//!
//! # Benchmark Categories
//!
//! - **fast**: both operands array-backed and forward
//! - **fast_reversed**: both operands reversed views of equal size
//! - **generic**: right operand is a selection view, forcing the cursor engine
//! - **ndarray**: `Array1 + Array1` reference

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use densevec::vector::{factory, Selector, Vector};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// Sizes from L1-resident to memory-bound (f64 = 8 bytes).
const VECTOR_SIZES: &[usize] = &[
    1_024,     // 8 KiB
    16_384,    // 128 KiB
    262_144,   // 2 MiB
    4_194_304, // 32 MiB
];

fn generate_test_data(len: usize) -> (Vector, Vector) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = factory::from_fn(len, |_| rng.random::<f64>());
    let b = factory::from_fn(len, |_| rng.random::<f64>());
    (a, b)
}

// ================================================================================================
// BENCHMARK IMPLEMENTATIONS
// ================================================================================================

fn benchmark_engines(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Plus_{}", format_size(size)));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f64>() * 2) as u64));

        let (a, b) = generate_test_data(size);

        group.bench_with_input(BenchmarkId::new("fast", size), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.plus(black_box(*b))))
        });

        let (ra, rb) = (a.ref_reverse(), b.ref_reverse());
        group.bench_with_input(
            BenchmarkId::new("fast_reversed", size),
            &(&ra, &rb),
            |bench, (a, b)| bench.iter(|| black_box(a.plus(black_box(*b)))),
        );

        if let Ok(selected) = b.ref_slice(&Selector::All) {
            group.bench_with_input(
                BenchmarkId::new("generic", size),
                &(&a, &selected),
                |bench, (a, b)| bench.iter(|| black_box(a.plus(black_box(*b)))),
            );
        }

        let a_ndarray = Array1::from_vec(a.to_vec());
        let b_ndarray = Array1::from_vec(b.to_vec());
        group.bench_with_input(
            BenchmarkId::new("ndarray", size),
            &(&a_ndarray, &b_ndarray),
            |bench, (a, b)| bench.iter(|| black_box(*a + *b)),
        );

        group.finish();
    }
}

fn benchmark_reductions(c: &mut Criterion) {
    let size = 262_144;
    let (a, _) = generate_test_data(size);
    let mut group = c.benchmark_group("Sum_2.0_MiB");
    group.throughput(Throughput::Bytes((size * std::mem::size_of::<f64>()) as u64));
    group.bench_function("fast", |bench| bench.iter(|| black_box(a.sum())));
    if let Ok(selected) = a.ref_slice(&Selector::All) {
        group.bench_function("generic", |bench| {
            bench.iter(|| black_box(densevec::ops::dispatch::sum(&selected)))
        });
    }
    group.finish();
}

// ================================================================================================
// UTILITY FUNCTIONS
// ================================================================================================

fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<f64>();
    if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{}_B", bytes)
    }
}

criterion_group!(benches, benchmark_engines, benchmark_reductions);
criterion_main!(benches);
