//! Simulate a pointer session and render the resulting heat map.

use std::time::{Duration, Instant};

use pipeline::{HeatmapPipeline, PipelineConfig};

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("tracing init");

    let config = PipelineConfig {
        width: 640,
        height: 480,
        ..PipelineConfig::default()
    };
    let pipeline = HeatmapPipeline::new(config).expect("pipeline setup");

    // Figure-eight pointer path with clicks sprinkled along it
    let t0 = Instant::now();
    let mut redraws_due = 0;
    for i in 0..400u64 {
        let t = i as f32 / 400.0 * std::f32::consts::TAU;
        let x = 320.0 + t.sin() * 240.0;
        let y = 240.0 + (2.0 * t).sin() * 160.0;
        let at = t0 + Duration::from_millis(i * 25);

        if pipeline.ingest_move(x, y, at) {
            redraws_due += 1;
        }
        if i % 97 == 0 {
            pipeline.ingest_click(x, y);
        }
    }
    println!("Cadence requested {redraws_due} redraws over the session");

    pipeline.draw().await.expect("render pass");

    let painted = pipeline.with_surface(|pixmap| {
        pixmap.data().chunks_exact(4).filter(|px| px[3] > 0).count()
    });
    println!("Non-transparent pixels: {painted}");

    let png = pipeline.to_png().expect("png encode");
    std::fs::write("live_session.png", &png).unwrap();
    println!("Saved to live_session.png ({} bytes)", png.len());
}
