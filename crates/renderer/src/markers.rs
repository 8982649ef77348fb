//! Labeled markers at raw sample locations.
//!
//! Each sample above the style threshold gets a white disc, an outline
//! ring in the value's gradient color, and a centered numeric label.
//! Labels are drawn as segment-style digit strokes, so no font data is
//! bundled.

use heatmap_common::{MapStyle, SamplePoint};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::color::value_to_color;

/// Label text color (dark slate, readable on the white disc).
const LABEL_COLOR: [u8; 3] = [71, 79, 80];

/// Draw markers for every sample whose value exceeds the threshold.
pub fn draw_markers(
    pixmap: &mut Pixmap,
    data_points: &[SamplePoint],
    style: &MapStyle,
    point_size: f32,
) {
    for point in data_points {
        if point.value <= style.threshold {
            continue;
        }

        let rgb = value_to_color(point.value, style.hue, style.max_value);

        // White disc under the label
        let mut pb = PathBuilder::new();
        pb.push_circle(point.x, point.y, point_size);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color_rgba8(255, 255, 255, 242);
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

            // Ring in the value's color
            let mut ring = Paint::default();
            ring.set_color_rgba8(rgb.r, rgb.g, rgb.b, 204);
            ring.anti_alias = true;
            let stroke = Stroke {
                width: point_size / 4.0,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &ring, &stroke, Transform::identity(), None);
        }

        let label = format!("{}", point.value.round() as i64);
        draw_label(pixmap, point.x, point.y, &label, point_size - 2.0);
    }
}

/// Draw a centered numeric label using segment-style digits.
fn draw_label(pixmap: &mut Pixmap, x: f32, y: f32, text: &str, font_size: f32) {
    if font_size <= 0.0 {
        return;
    }

    let char_width = font_size * 0.6;
    let char_spacing = font_size * 0.1;
    let text_width = text.len() as f32 * (char_width + char_spacing) - char_spacing;

    let mut paint = Paint::default();
    paint.set_color_rgba8(LABEL_COLOR[0], LABEL_COLOR[1], LABEL_COLOR[2], 255);
    paint.anti_alias = true;

    let start_x = x - text_width / 2.0;
    for (i, ch) in text.chars().enumerate() {
        let cx = start_x + i as f32 * (char_width + char_spacing) + char_width / 2.0;
        draw_digit(pixmap, cx, y, ch, char_width, font_size, &paint);
    }
}

/// Draw one character as straight stroke segments.
fn draw_digit(
    pixmap: &mut Pixmap,
    x: f32,
    y: f32,
    ch: char,
    width: f32,
    height: f32,
    paint: &Paint,
) {
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    let stroke = Stroke {
        width: width * 0.15,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    // Seven-segment style shapes; unknown characters are skipped.
    let segments: &[((f32, f32), (f32, f32))] = match ch {
        '0' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (-1.0, -1.0)),
        ],
        '1' => &[((0.0, -1.0), (0.0, 1.0))],
        '2' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 0.0)),
            ((1.0, 0.0), (-1.0, 0.0)),
            ((-1.0, 0.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (1.0, 1.0)),
        ],
        '3' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
        ],
        '4' => &[
            ((-1.0, -1.0), (-1.0, 0.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
            ((1.0, -1.0), (1.0, 1.0)),
        ],
        '5' => &[
            ((1.0, -1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (-1.0, 0.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
        ],
        '6' => &[
            ((1.0, -1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (1.0, 1.0)),
            ((1.0, 1.0), (1.0, 0.0)),
            ((1.0, 0.0), (-1.0, 0.0)),
        ],
        '7' => &[((-1.0, -1.0), (1.0, -1.0)), ((1.0, -1.0), (0.0, 1.0))],
        '8' => &[
            ((-1.0, -1.0), (1.0, -1.0)),
            ((1.0, -1.0), (1.0, 1.0)),
            ((1.0, 1.0), (-1.0, 1.0)),
            ((-1.0, 1.0), (-1.0, -1.0)),
            ((-1.0, 0.0), (1.0, 0.0)),
        ],
        '9' => &[
            ((-1.0, 0.0), (1.0, 0.0)),
            ((1.0, 0.0), (1.0, -1.0)),
            ((1.0, -1.0), (-1.0, -1.0)),
            ((-1.0, -1.0), (-1.0, 0.0)),
            ((1.0, 0.0), (1.0, 1.0)),
        ],
        '-' => &[((-1.0, 0.0), (1.0, 0.0))],
        _ => &[],
    };

    for &((x1, y1), (x2, y2)) in segments {
        let mut pb = PathBuilder::new();
        pb.move_to(x + x1 * half_w, y + y1 * half_h);
        pb.line_to(x + x2 * half_w, y + y2 * half_h);
        if let Some(path) = pb.finish() {
            pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), None);
        }
    }
}
