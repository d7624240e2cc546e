//! Benchmarks for hueprint-core analysis operations
//!
//! Run with: cargo bench -p hueprint-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hueprint_core::cluster::select_dominant;
use hueprint_core::regional::analyze_regions;
use hueprint_core::{
    analyze_with, name_for, sample_bytes, AnalysisOptions, FrequencyTable, Rgb, SeededSource,
};

/// Generate a synthetic byte stream with gradient structure and repeats.
fn generate_test_bytes(len: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(len);
    for i in 0..len {
        // Smooth ramps with a periodic block repeat so the frequency table
        // sees both gradients and genuinely dominant colors.
        let value = match i % 3 {
            0 => (i / 3 % 256) as u8,
            1 => (255 - (i / 7 % 256)) as u8,
            _ => ((i / 3 % 4) * 64) as u8,
        };
        bytes.push(value);
    }
    bytes
}

/// Benchmark the full analysis pipeline end to end
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");
    let options = AnalysisOptions::default();

    for size in [3_000usize, 30_000, 300_000].iter() {
        let bytes = generate_test_bytes(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("analyze", format!("{}b", size)),
            &bytes,
            |b, bytes| {
                b.iter(|| {
                    let mut source = SeededSource::new(1);
                    analyze_with(black_box(bytes), black_box(&options), &mut source)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark byte sampling and frequency counting in isolation
fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");

    for size in [3_000usize, 30_000, 300_000].iter() {
        let bytes = generate_test_bytes(*size);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("sample_bytes", format!("{}b", size)),
            &bytes,
            |b, bytes| {
                b.iter(|| sample_bytes(black_box(bytes)));
            },
        );

        let sample = sample_bytes(&bytes);
        group.bench_with_input(
            BenchmarkId::new("frequency_table", format!("{}b", size)),
            &sample,
            |b, sample| {
                b.iter(|| FrequencyTable::from_colors(black_box(sample.colors())));
            },
        );
    }

    group.finish();
}

/// Benchmark nearest-name classification
fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");

    // Mix of exact catalog hits, near misses, and generic-fallback colors.
    let colors: Vec<Rgb> = (0u16..64)
        .map(|i| {
            let v = (i * 37 % 256) as u8;
            Rgb::new(v, v.wrapping_add(91), v.wrapping_mul(3))
        })
        .collect();

    group.throughput(Throughput::Elements(colors.len() as u64));
    group.bench_function("name_for", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(name_for(black_box(*color)));
            }
        });
    });

    group.finish();
}

/// Benchmark the 3x3 regional pipeline over a pre-sampled stream
fn bench_regional(c: &mut Criterion) {
    let mut group = c.benchmark_group("regional");
    let options = AnalysisOptions::default();

    for size in [1_000usize, 10_000, 100_000].iter() {
        let sample = sample_bytes(&generate_test_bytes(*size * 3));
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("analyze_regions", format!("{}px", size)),
            &sample,
            |b, sample| {
                b.iter(|| analyze_regions(black_box(sample.colors()), black_box(&options)));
            },
        );
    }

    group.finish();
}

/// Benchmark representative-color selection
fn bench_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster");

    let distinct: Vec<Rgb> = (0u16..100)
        .map(|i| Rgb::new((i * 2) as u8, (i * 5 % 256) as u8, (255 - i * 2) as u8))
        .collect();

    group.throughput(Throughput::Elements(distinct.len() as u64));
    group.bench_function("select_dominant_k8", |b| {
        b.iter(|| {
            let mut source = SeededSource::new(9);
            select_dominant(black_box(&distinct), black_box(8), &mut source)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_analysis,
    bench_sampler,
    bench_classifier,
    bench_regional,
    bench_cluster,
);

criterion_main!(benches);
