//! Set algebra benchmarks.
//!
//! `unique` against a `HashSet::insert` filter baseline, `sorted_unique`
//! against `Vec::dedup`, and `difference` with the operand collected once
//! (operator form) versus once per call (direct form).

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use seqpipe::direct;
use seqpipe::ender::count;
use seqpipe::operator::{difference, sorted_unique, unique};
use seqpipe::pipe;
use std::collections::HashSet;
use std::hint::black_box;

const SIZES: [u64; 3] = [1_000, 10_000, 100_000];

/// Every value appears about four times, in a scrambled order.
fn generate_repeating(size: u64) -> Vec<u64> {
    (0..size).map(|value| (value * 7_919) % (size / 4 + 1)).collect()
}

fn batch_size_for(size: u64) -> BatchSize {
    if size < 10_000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unique");

    for size in SIZES {
        let base_vec = generate_repeating(size);

        group.bench_with_input(BenchmarkId::new("unique", size), &size, |bencher, &size| {
            let deduplicate = unique();
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| pipe!(black_box(elements), &deduplicate, count()),
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("hash_set_baseline", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| {
                        let mut seen = HashSet::new();
                        black_box(elements)
                            .into_iter()
                            .filter(|value| seen.insert(*value))
                            .count()
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_sorted_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_unique");

    for size in SIZES {
        let mut base_vec = generate_repeating(size);
        base_vec.sort_unstable();

        group.bench_with_input(BenchmarkId::new("sorted_unique", size), &size, |bencher, &size| {
            let deduplicate = sorted_unique();
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| pipe!(black_box(elements), &deduplicate, count()),
                batch_size_for(size),
            );
        });

        group.bench_with_input(
            BenchmarkId::new("vec_dedup_baseline", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |mut elements| {
                        elements.dedup();
                        black_box(elements).len()
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_difference(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("difference");

    for size in SIZES {
        let others: Vec<u64> = (0..size).step_by(3).collect();

        group.bench_with_input(
            BenchmarkId::new("operator_collected_once", size),
            &size,
            |bencher, &size| {
                let without = difference(others.clone());
                bencher.iter(|| pipe!(black_box(0..size), &without, count()));
            },
        );

        group.bench_with_input(BenchmarkId::new("direct_per_call", size), &size, |bencher, &size| {
            bencher.iter(|| direct::difference(black_box(0..size), others.iter().copied()).count());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_unique,
    benchmark_sorted_unique,
    benchmark_difference
);

criterion_main!(benches);
