//! Benchmarks for the Atlas analytics pipeline
//!
//! Run with: cargo bench

use atlas_analytics::analytics::{compute_metrics, ValueHistoryBuilder};
use atlas_analytics::catalog::demo_catalog;
use atlas_analytics::config::ModelConfig;
use atlas_analytics::series::ValueSeriesSynthesizer;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");
    let synth = ValueSeriesSynthesizer::default();
    let property = demo_catalog().remove(0);

    for days in [30u32, 90, 365] {
        group.throughput(Throughput::Elements(u64::from(days) + 1));
        group.bench_function(format!("days_{}", days), |b| {
            b.iter(|| synth.synthesize(black_box(&property), black_box(days)))
        });
    }

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let synth = ValueSeriesSynthesizer::default();
    let property = demo_catalog().remove(0);

    for days in [90u32, 365] {
        let points = synth.synthesize(&property, days);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("compute_{}", days), |b| {
            b.iter(|| compute_metrics(black_box(&points)))
        });
    }

    group.finish();
}

fn bench_full_catalog(c: &mut Criterion) {
    let catalog = demo_catalog();
    let builder = ValueHistoryBuilder::new(ModelConfig::default());

    c.bench_function("build_all_90d", |b| {
        b.iter(|| builder.build_all(black_box(&catalog)).unwrap())
    });
}

criterion_group!(benches, bench_synthesize, bench_metrics, bench_full_catalog);
criterion_main!(benches);
