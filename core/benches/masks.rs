use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maskarray::prelude::*;

mod common;

criterion_group!(masks, construct_benchmark, algebra_benchmark, query_benchmark);
criterion_main!(masks);

fn construct_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_dense");
    group.sample_size(10);
    for layout in common::ALL {
        let dense = DenseMask::from_fn(UVec2::new(layout.width, layout.height), layout.cell);
        group.bench_function(layout.name, |b| b.iter(|| MaskArray::from_dense(&dense)));
    }
    group.finish();
}

fn algebra_benchmark(c: &mut Criterion) {
    let pool = SharedRowPool::new();
    let wires = common::WIRES.build(pool.clone());
    let contacts = common::CONTACTS.build(pool);

    let mut group = c.benchmark_group("algebra");
    group.bench_function("union", |b| b.iter(|| wires.union(&contacts).unwrap()));
    group.bench_function("intersection", |b| {
        b.iter(|| wires.intersection(&contacts).unwrap())
    });
    group.bench_function("xor", |b| {
        b.iter(|| wires.symmetric_difference(&contacts).unwrap())
    });
    group.bench_function("complement", |b| b.iter(|| wires.complement()));
    group.finish();
}

fn query_benchmark(c: &mut Criterion) {
    let mask = common::WIRES.build(SharedRowPool::new());
    let rect = Rect::span(UVec2::new(100, 100), UVec2::new(3000, 2000));

    let mut group = c.benchmark_group("query");
    group.bench_function("population", |b| b.iter(|| black_box(&mask).population()));
    group.bench_function("bounding_rect", |b| {
        b.iter(|| black_box(&mask).bounding_rect())
    });
    group.bench_function("rect_cover", |b| b.iter(|| mask.rect_cover(black_box(&rect))));
    group.bench_function("stats", |b| b.iter(|| black_box(&mask).stats()));
    group.finish();
}
