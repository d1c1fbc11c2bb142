//! Benchmark for PolymorphicList vs standard LinkedList.
//!
//! Compares polylist's PolymorphicList against Rust's standard LinkedList
//! for the operations the list is built around.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use polylist::polymorphic::{PolymorphicList, Sequence};
use std::collections::LinkedList;
use std::hint::black_box;

// =============================================================================
// prepend Benchmark
// =============================================================================

fn benchmark_prepend(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prepend");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("PolymorphicList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = PolymorphicList::new();
                    for index in 0..size {
                        list = list.prepend(black_box(index)).into();
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        list.push_front(black_box(index));
                    }
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// append Benchmark
// =============================================================================

fn benchmark_append(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("append");

    // append walks to the end on every call
    for size in [100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("PolymorphicList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = PolymorphicList::new();
                    for index in 0..size {
                        list.push_back(black_box(index));
                    }
                    black_box(list)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut list = LinkedList::new();
                    for index in 0..size {
                        list.push_back(black_box(index));
                    }
                    black_box(list)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Lookup Benchmark
// =============================================================================

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup");

    for size in [100, 1000, 10000] {
        let polymorphic_list: PolymorphicList<i32> = (0..size).collect();
        let standard_list: LinkedList<i32> = (0..size).collect();
        let middle = size / 2;

        group.bench_with_input(
            BenchmarkId::new("PolymorphicList_get", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(polymorphic_list.get(black_box(middle as isize))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("PolymorphicList_index_of", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(polymorphic_list.index_of(black_box(&middle))));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList_position", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let target = black_box(middle);
                    black_box(standard_list.iter().position(|element| *element == target))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// concat Benchmark
// =============================================================================

fn benchmark_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("concat");

    for size in [100, 1000, 10000] {
        let left: PolymorphicList<i32> = (0..size).collect();
        let right: PolymorphicList<i32> = (size..size * 2).collect();
        let standard_left: LinkedList<i32> = (0..size).collect();
        let standard_right: LinkedList<i32> = (size..size * 2).collect();

        group.bench_with_input(
            BenchmarkId::new("PolymorphicList", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(left.concat(&right)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("LinkedList_clone_append", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut joined = standard_left.clone();
                    joined.append(&mut standard_right.clone());
                    black_box(joined)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_prepend,
    benchmark_append,
    benchmark_lookup,
    benchmark_concat
);

criterion_main!(benches);
