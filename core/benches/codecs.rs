use criterion::{criterion_group, criterion_main, Criterion};
use maskarray::prelude::*;

mod common;

criterion_group!(codecs, rle_benchmark, pages_benchmark);
criterion_main!(codecs);

fn rle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("RLE");
    group.sample_size(20);
    for layout in common::ALL {
        let mask = layout.build(SharedRowPool::new());
        let rle = mask.to_rle_string();
        group.bench_function(format!("to_RLE/{}", layout.name), |b| {
            b.iter(|| mask.to_rle_string())
        });
        group.bench_function(format!("from_RLE/{}", layout.name), |b| {
            b.iter(|| MaskArray::from_rle_str(&rle).unwrap())
        });
    }
    group.finish();
}

fn pages_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pages");
    for layout in common::ALL {
        let mask = layout.build(SharedRowPool::new());
        let bytes = mask.to_pages().unwrap();
        group.bench_function(format!("to_pages/{}", layout.name), |b| {
            b.iter(|| mask.to_pages().unwrap())
        });
        group.bench_function(format!("from_pages/{}", layout.name), |b| {
            b.iter(|| MaskArray::from_pages(&bytes).unwrap())
        });
    }
    group.finish();
}
