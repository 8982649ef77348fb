//! Benchmarks for full field render passes.
//!
//! Run with: cargo bench --package renderer --bench field_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geometry::convex_hull;
use heatmap_common::{MapStyle, SamplePoint};
use rand::Rng;
use renderer::field::{render_field, FieldParams};
use tiny_skia::Pixmap;

/// Generate a random sample cloud over the surface.
fn generate_samples(count: usize, width: f32, height: f32) -> Vec<SamplePoint> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            SamplePoint::new(
                rng.gen_range(0.0..width),
                rng.gen_range(0.0..height),
                rng.gen_range(0.0..150.0),
            )
        })
        .collect()
}

fn bench_render_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_field");
    group.sample_size(20);

    let style = MapStyle::default();

    for &(interval, label) in &[(16.0f32, "interval_16"), (8.0, "interval_8")] {
        let points = generate_samples(200, 640.0, 480.0);
        let hull = convex_hull(&points);
        let mut pixmap = Pixmap::new(640, 480).unwrap();

        group.bench_with_input(BenchmarkId::new("640x480", label), &interval, |b, _| {
            b.iter(|| {
                render_field(
                    &mut pixmap,
                    &FieldParams {
                        limit: 100,
                        interval,
                        data_points: black_box(&points),
                        polygon: &hull,
                        clean_edges: true,
                        mesh: false,
                        points: false,
                        point_size: 13.0,
                        corners: false,
                        style: &style,
                    },
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_field);
criterion_main!(benches);
