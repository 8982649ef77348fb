//! Render a synthetic attention heat map and save it as a PNG.

use geometry::convex_hull;
use heatmap_common::{ClickStyle, MapStyle, SamplePoint};
use renderer::clicks::render_clicks;
use renderer::field::{render_field, FieldParams};
use renderer::png::encode_png;
use tiny_skia::Pixmap;

fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("tracing init");

    let width = 640u32;
    let height = 480u32;

    // Two synthetic attention clusters plus scattered noise
    let mut points = Vec::new();
    for i in 0..60 {
        let t = i as f32 / 60.0;
        let angle = t * std::f32::consts::TAU * 3.0;
        points.push(SamplePoint::new(
            200.0 + angle.cos() * 60.0 * t,
            180.0 + angle.sin() * 60.0 * t,
            120.0 * (1.0 - t) + 10.0,
        ));
        points.push(SamplePoint::new(
            460.0 + angle.sin() * 40.0 * t,
            320.0 + angle.cos() * 40.0 * t,
            80.0 * t + 5.0,
        ));
    }

    let hull = convex_hull(&points);
    println!("Samples: {}, hull vertices: {}", points.len(), hull.len());

    let style = MapStyle::default();
    let mut pixmap = Pixmap::new(width, height).expect("surface allocation");

    render_field(
        &mut pixmap,
        &FieldParams {
            limit: 100,
            interval: 8.0,
            data_points: &points,
            polygon: &hull,
            clean_edges: true,
            mesh: false,
            points: true,
            point_size: 13.0,
            corners: false,
            style: &style,
        },
    );

    let clicks = vec![
        SamplePoint::new(200.0, 180.0, 1.0),
        SamplePoint::new(460.0, 320.0, 2.0),
    ];
    render_clicks(&mut pixmap, &clicks, &ClickStyle::default());

    let non_transparent = pixmap
        .data()
        .chunks_exact(4)
        .filter(|px| px[3] > 0)
        .count();
    println!("Non-transparent pixels: {}", non_transparent);

    let png = encode_png(pixmap.data(), width as usize, height as usize).unwrap();
    std::fs::write("heatmap_demo.png", &png).unwrap();
    println!("Saved to heatmap_demo.png ({} bytes)", png.len());
}
