//! Benchmarks for the CPU-side droplet derivation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;

use rainfield::motion;
use rainfield::{Camera, Color, RainConfig, RainField, ShapeParams};

fn bench_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("samples");
    let view = Camera::new().view_matrix();

    for count in [1_000u32, 10_000, 100_000] {
        let mut field = RainField::new(RainConfig::new().with_seed(1).with_count(count))
            .expect("valid config");
        field.advance(2.5);

        group.bench_with_input(BenchmarkId::from_parameter(count), &field, |b, field| {
            b.iter(|| {
                let visible = field.samples(&view).filter(|s| s.fade > 0.0).count();
                black_box(visible)
            })
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for count in [1_000u32, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(RainField::new(RainConfig::new().with_seed(1).with_count(count))))
        });
    }

    group.finish();
}

fn bench_shape_alpha(c: &mut Criterion) {
    let shape = ShapeParams::default();

    c.bench_function("shape_alpha_32x32", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for y in 0..32 {
                for x in 0..32 {
                    let uv = Vec2::new((x as f32 + 0.5) / 32.0, (y as f32 + 0.5) / 32.0);
                    sum += motion::shape_alpha(black_box(uv), &shape, 1.0, 0.1).unwrap_or(0.0);
                }
            }
            black_box(sum)
        })
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let mut field = RainField::new(RainConfig::new().with_seed(1)).expect("valid config");
    field.advance(1.0);
    let camera = Camera::new();

    c.bench_function("rasterize_640x360", |b| {
        b.iter(|| black_box(rainfield::rasterize(&field, &camera, 640, 360, Color::BACKGROUND)))
    });
}

criterion_group!(
    benches,
    bench_samples,
    bench_build,
    bench_shape_alpha,
    bench_rasterize
);
criterion_main!(benches);
