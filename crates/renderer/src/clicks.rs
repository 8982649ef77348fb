//! Click overlay rendering.
//!
//! Paints an eight-armed star at every recorded click location, on top
//! of the interpolated field.

use heatmap_common::{ClickStyle, SamplePoint};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

/// Number of arms on a click star.
const STAR_ARMS: usize = 8;

/// Draw a star for every click point.
pub fn render_clicks(pixmap: &mut Pixmap, click_points: &[SamplePoint], style: &ClickStyle) {
    let [r, g, b, a] = style.color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    for point in click_points {
        if let Some(path) = star_path(STAR_ARMS, point.x, point.y, style.size, style.size / 2.0) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }
}

/// Build a star path alternating between outer and inner radius.
fn star_path(arms: usize, x: f32, y: f32, outer_radius: f32, inner_radius: f32) -> Option<Path> {
    let angle = std::f32::consts::PI / arms as f32;
    let mut pb = PathBuilder::new();

    for i in 0..(2 * arms) {
        let radius = if i & 1 == 1 { inner_radius } else { outer_radius };
        let px = x + (i as f32 * angle).cos() * radius;
        let py = y + (i as f32 * angle).sin() * radius;
        if i == 0 {
            pb.move_to(px, py);
        } else {
            pb.line_to(px, py);
        }
    }
    pb.close();

    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_pixels(pixmap: &Pixmap) -> usize {
        pixmap.data().chunks_exact(4).filter(|px| px[3] > 0).count()
    }

    #[test]
    fn test_star_path_extent() {
        let path = star_path(8, 50.0, 50.0, 20.0, 10.0).unwrap();
        let bounds = path.bounds();
        // Spans the outer diameter in both axes
        assert!((bounds.width() - 40.0).abs() < 1.0);
        assert!((bounds.height() - 40.0).abs() < 1.0);
    }

    #[test]
    fn test_clicks_paint() {
        let clicks = vec![
            SamplePoint::new(25.0, 25.0, 1.0),
            SamplePoint::new(75.0, 75.0, 3.0),
        ];
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        render_clicks(&mut pixmap, &clicks, &ClickStyle::default());
        assert!(opaque_pixels(&pixmap) > 0);
    }

    #[test]
    fn test_no_clicks_no_paint() {
        let mut pixmap = Pixmap::new(100, 100).unwrap();
        render_clicks(&mut pixmap, &[], &ClickStyle::default());
        assert_eq!(opaque_pixels(&pixmap), 0);
    }
}
