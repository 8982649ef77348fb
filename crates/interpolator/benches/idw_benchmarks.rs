//! Benchmarks for IDW value estimation.
//!
//! Run with: cargo bench --package interpolator --bench idw_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geometry::convex_hull;
use heatmap_common::{Point, SamplePoint};
use interpolator::{clamp_neighborhood, estimate_value};
use rand::Rng;

/// Generate a random sample cloud over a surface-sized area.
fn generate_samples(count: usize) -> Vec<SamplePoint> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            SamplePoint::new(
                rng.gen_range(0.0..1280.0),
                rng.gen_range(0.0..720.0),
                rng.gen_range(0.0..150.0),
            )
        })
        .collect()
}

fn bench_estimate_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_value");

    for &count in &[50usize, 200, 1000] {
        let points = generate_samples(count);
        let hull = convex_hull(&points);
        let limit = clamp_neighborhood(100, points.len());

        group.bench_with_input(BenchmarkId::new("samples", count), &count, |b, _| {
            b.iter(|| {
                estimate_value(
                    black_box(limit),
                    black_box(&hull),
                    black_box(&points),
                    black_box(Point::new(640.0, 360.0)),
                )
            })
        });
    }

    group.finish();
}

fn bench_lattice_sweep(c: &mut Criterion) {
    let points = generate_samples(200);
    let hull = convex_hull(&points);
    let limit = clamp_neighborhood(100, points.len());

    c.bench_function("lattice_sweep_8px", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            let mut y = 0.0f32;
            while y < 720.0 {
                let mut x = 0.0f32;
                while x < 1280.0 {
                    acc += estimate_value(limit, &hull, &points, Point::new(x, y));
                    x += 8.0;
                }
                y += 8.0;
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_estimate_value, bench_lattice_sweep);
criterion_main!(benches);
