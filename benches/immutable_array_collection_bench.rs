//! ImmutableArrayCollection transformation benchmark.
//!
//! Every transformation clones the backing store once. These benchmarks track
//! that cost per operation across collection sizes, against building the same
//! result pair by pair through `set` as a baseline (quadratic, so only for
//! the smaller sizes).

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use immutable_collection::collection::{ImmutableArrayCollection, ImmutableCollection, Key};
use std::hint::black_box;

const SIZES: [i32; 4] = [10, 100, 1000, 10000];

fn generate_collection(size: i32) -> ImmutableArrayCollection<i32> {
    ImmutableArrayCollection::from_values(0..size)
}

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("immutable_array_collection_add");

    for size in SIZES {
        let collection = generate_collection(size);
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bencher, _| {
            bencher.iter(|| black_box(collection.add(black_box(-1))));
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("immutable_array_collection_remove");

    for size in SIZES {
        let collection = generate_collection(size);
        let middle = Key::from(size / 2);
        group.bench_with_input(BenchmarkId::new("remove", size), &size, |bencher, _| {
            bencher.iter(|| black_box(collection.remove(black_box(&middle))));
        });
        group.bench_with_input(
            BenchmarkId::new("remove_element", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| black_box(collection.remove_element(black_box(&(size / 2)))));
            },
        );
    }

    group.finish();
}

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("immutable_array_collection_filter");

    for size in SIZES {
        let collection = generate_collection(size);
        group.bench_with_input(BenchmarkId::new("filter", size), &size, |bencher, _| {
            bencher.iter(|| black_box(collection.filter(|value| value % 2 == 0)));
        });
        group.bench_with_input(BenchmarkId::new("partition", size), &size, |bencher, _| {
            bencher.iter(|| black_box(collection.partition(|_, value| value % 2 == 0)));
        });
    }

    group.finish();
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("immutable_array_collection_construction");

    for size in SIZES {
        let pairs: Vec<(Key, i32)> = (0..size).map(|value| (Key::from(value), value)).collect();
        group.bench_with_input(BenchmarkId::new("collect", size), &size, |bencher, _| {
            bencher.iter_batched(
                || pairs.clone(),
                |pairs| black_box(pairs.into_iter().collect::<ImmutableArrayCollection<i32>>()),
                BatchSize::SmallInput,
            );
        });
        if size > 1000 {
            continue;
        }
        group.bench_with_input(BenchmarkId::new("fold_set", size), &size, |bencher, _| {
            bencher.iter_batched(
                || pairs.clone(),
                |pairs| {
                    black_box(
                        pairs
                            .into_iter()
                            .fold(ImmutableArrayCollection::new(), |collection, (key, value)| {
                                collection.set(key, value)
                            }),
                    )
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_remove,
    benchmark_filter,
    benchmark_construction
);
criterion_main!(benches);
