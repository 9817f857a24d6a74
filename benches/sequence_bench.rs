//! Benchmark for lazy sequences.
//!
//! Compares sequence pipelines against the equivalent `std::iter` chains and
//! measures how much work `first` avoids on long pipelines.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyseq::sequence::{self, Sequence};
use std::hint::black_box;

// =============================================================================
// map / filter Benchmarks
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1_000, 10_000] {
        let elements: Vec<u64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("sequence", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let pipeline = sequence::from(elements)
                        .map(|element, _| element * 3)
                        .filter(|element, _| element % 2 == 0);
                    black_box(pipeline.to_vec())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("std_iter", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let collected: Vec<u64> = elements
                        .iter()
                        .map(|element| element * 3)
                        .filter(|element| element % 2 == 0)
                        .collect();
                    black_box(collected)
                });
            },
        );

        // Reusing the pipeline measures traversal without construction
        let pipeline = sequence::from(elements.clone())
            .map(|element, _| element * 3)
            .filter(|element, _| element % 2 == 0);
        group.bench_with_input(
            BenchmarkId::new("sequence_retraversal", size),
            &pipeline,
            |bencher, pipeline| {
                bencher.iter(|| black_box(pipeline.to_vec()));
            },
        );
    }

    group.finish();
}

// =============================================================================
// first Benchmarks
// =============================================================================

fn benchmark_first(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("first");

    for size in [1_000, 100_000] {
        let elements: Vec<u64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("first_after_map", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let pipeline = sequence::from(elements).map(|element, _| element + 1);
                    black_box(pipeline.first())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("to_vec_after_map", size),
            &elements,
            |bencher, elements| {
                bencher.iter(|| {
                    let pipeline = sequence::from(elements).map(|element, _| element + 1);
                    black_box(pipeline.to_vec())
                });
            },
        );
    }

    group.bench_function("first_of_unbounded_range", |bencher| {
        bencher.iter(|| {
            let pipeline = sequence::from(0_u64..)
                .map(|element, _| element * element)
                .filter(|element, _| *element > 1_000_000);
            black_box(pipeline.first())
        });
    });

    group.finish();
}

// =============================================================================
// zip Benchmarks
// =============================================================================

fn benchmark_zip(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip");

    for size in [100, 10_000] {
        let left: Vec<u32> = (0..size).collect();
        let right: Vec<u32> = (0..size).rev().collect();

        group.bench_with_input(
            BenchmarkId::new("zip_two", size),
            &(left.clone(), right.clone()),
            |bencher, (left, right)| {
                bencher.iter(|| {
                    let zipped = sequence::from(left).zip(sequence::from(right));
                    black_box(zipped.to_vec())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("zip_all_three", size),
            &(left.clone(), right.clone()),
            |bencher, (left, right)| {
                bencher.iter(|| {
                    let zipped = sequence::from(left)
                        .zip_all((sequence::from(right), sequence::from(0_usize..)));
                    black_box(zipped.to_vec())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("boxed_zip_two", size),
            &(left, right),
            |bencher, (left, right)| {
                bencher.iter(|| {
                    let zipped = sequence::from(left).boxed().zip(sequence::from(right).boxed());
                    black_box(zipped.to_vec())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_map_filter, benchmark_first, benchmark_zip);
criterion_main!(benches);
