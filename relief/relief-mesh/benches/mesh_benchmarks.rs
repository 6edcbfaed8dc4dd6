//! Benchmarks for variant selection, surface construction, and extrusion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relief_mesh::{build_mesh, extrude_solid, select_variants, DEFAULT_THRESHOLD};
use relief_types::{BitDepth, HeightField};

/// Synthetic ripple field: smooth overall, with enough local contrast to
/// exercise both geometry variants.
fn ripple_field(width: usize, height: usize) -> HeightField {
    #[allow(clippy::cast_precision_loss)]
    let samples: Vec<f64> = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let fx = x as f64 * 0.35;
                let fy = y as f64 * 0.35;
                ((fx.sin() * fy.cos()) * 0.5 + 0.5).clamp(0.0, 1.0)
            })
        })
        .collect();
    match HeightField::from_samples(width, height, samples, BitDepth::Eight) {
        Ok(f) => f,
        Err(e) => panic!("bench field invalid: {e}"),
    }
}

fn bench_select_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_variants");
    for size in [64_usize, 256, 512] {
        let field = ripple_field(size, size);
        group.throughput(Throughput::Elements((field.cell_count()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &field, |b, f| {
            b.iter(|| select_variants(f, DEFAULT_THRESHOLD));
        });
    }
    group.finish();
}

fn bench_build_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_mesh");
    for size in [64_usize, 256, 512] {
        let field = ripple_field(size, size);
        let variants = select_variants(&field, DEFAULT_THRESHOLD);
        group.throughput(Throughput::Elements((field.cell_count()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(&field, &variants),
            |b, (f, v)| {
                b.iter(|| build_mesh(f, v));
            },
        );
    }
    group.finish();
}

fn bench_extrude_solid(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrude_solid");
    for size in [64_usize, 256, 512] {
        let field = ripple_field(size, size);
        let variants = select_variants(&field, DEFAULT_THRESHOLD);
        let mesh = match build_mesh(&field, &variants) {
            Ok(m) => m,
            Err(e) => panic!("bench mesh invalid: {e}"),
        };
        group.throughput(Throughput::Elements((field.cell_count()) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &mesh, |b, m| {
            b.iter(|| extrude_solid(m, 0.0));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_select_variants,
    bench_build_mesh,
    bench_extrude_solid
);
criterion_main!(benches);
