// Benchmarks for layout generation.
//
// Run with: cargo bench -p screen_grid_layout --bench generate

use criterion::{Criterion, criterion_group, criterion_main};
use screen_grid_layout::config::PlacementStrategy;
use screen_grid_layout::generator::try_generate;
use screen_grid_layout::size_pool::SizePools;
use screen_grid_layout::{
    InputBias, LayoutConfig, SequenceBuilder, generate_layout, generate_layout_with_bias,
};
use std::hint::black_box;

fn bench_single_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("seed_42", |b| b.iter(|| generate_layout(black_box(42))));

    group.bench_function("seed_sweep", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            generate_layout(black_box(seed))
        })
    });

    group.bench_function("right_bias", |b| {
        b.iter(|| generate_layout_with_bias(black_box(7), InputBias::Right))
    });

    group.finish();
}

fn bench_strategies(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let pools = SizePools::for_catalog();
    let mut group = c.benchmark_group("attempt");

    for strategy in [PlacementStrategy::Randomized, PlacementStrategy::Deterministic] {
        group.bench_function(format!("{strategy:?}"), |b| {
            b.iter(|| try_generate(black_box(1234), strategy, &config, &pools))
        });
    }

    group.finish();
}

fn bench_sequence(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("sequence");
    group.sample_size(10);
    group.bench_function("full_length", |b| {
        b.iter(|| SequenceBuilder::new(black_box(99), &config).build())
    });
    group.finish();
}

criterion_group!(benches, bench_single_layout, bench_strategies, bench_sequence);
criterion_main!(benches);
