//! Interpolated field rendering.
//!
//! Sweeps a regular lattice over the sample bounding box, estimates a
//! value per cell, and paints each cell as a radial-gradient patch so
//! adjacent cells blend smoothly. Optionally masks the result to the
//! hull outline and overlays labeled sample markers.

use heatmap_common::{BoundingBox, MapStyle, Point, SamplePoint};
use interpolator::{clamp_neighborhood, estimate_value, NO_VALUE};
use rayon::prelude::*;
use tiny_skia::{
    BlendMode, Color, FillRule, GradientStop, Paint, PathBuilder, Pixmap, Rect, RadialGradient,
    SpreadMode, Transform,
};

use crate::color::value_to_color;
use crate::markers;

/// Parameters for one field render pass.
///
/// Everything the pass reads is passed explicitly; the renderer holds no
/// state of its own.
#[derive(Debug, Clone)]
pub struct FieldParams<'a> {
    /// Neighborhood size for value estimation (clamped internally).
    pub limit: usize,
    /// Lattice step in surface units.
    pub interval: f32,
    /// Sample snapshot for this pass.
    pub data_points: &'a [SamplePoint],
    /// Convex hull of the snapshot.
    pub polygon: &'a [Point],
    /// Mask the painted field to the hull outline.
    pub clean_edges: bool,
    /// Paint discrete per-cell discs instead of a smooth blend.
    pub mesh: bool,
    /// Overlay labeled markers at raw sample locations.
    pub points: bool,
    /// Marker radius.
    pub point_size: f32,
    /// Whether the snapshot carries corner anchors (disables edge
    /// masking, since the field intentionally spans the surface).
    pub corners: bool,
    /// Color and threshold configuration.
    pub style: &'a MapStyle,
}

/// Render the interpolated field onto the surface.
///
/// Clears the surface, paints one gradient patch per lattice cell that
/// falls inside the hull, then applies the optional hull mask and marker
/// overlay. The pass is a pure function of its parameters: identical
/// inputs paint identical pixels.
pub fn render_field(pixmap: &mut Pixmap, params: &FieldParams) {
    pixmap.fill(Color::TRANSPARENT);

    let n = params.data_points.len();
    if n == 0 {
        tracing::debug!("field render skipped: no samples");
        return;
    }
    if params.polygon.len() < 3 {
        tracing::debug!(
            vertices = params.polygon.len(),
            "field render skipped: degenerate hull"
        );
        return;
    }

    let limit = clamp_neighborhood(params.limit, n);
    let bbox = match BoundingBox::of_samples(params.data_points) {
        Some(bbox) => bbox,
        None => return,
    };

    tracing::debug!(
        samples = n,
        limit,
        interval = params.interval,
        width = bbox.width(),
        height = bbox.height(),
        "rendering field"
    );

    // Per-cell estimation is pure, so the sweep parallelizes; painting
    // stays in lattice order to keep output deterministic.
    let lattice = build_lattice(&bbox, params.interval);
    let cells: Vec<(Point, f32)> = lattice
        .par_iter()
        .map(|&cell| {
            (
                cell,
                estimate_value(limit, params.polygon, params.data_points, cell),
            )
        })
        .collect();

    for (cell, value) in cells {
        if value != NO_VALUE {
            paint_patch(pixmap, cell, value, params);
        }
    }

    if !params.corners && params.clean_edges && params.polygon.len() > 1 {
        mask_to_hull(pixmap, params.polygon);
    }

    if params.points {
        markers::draw_markers(pixmap, params.data_points, params.style, params.point_size);
    }
}

/// Lattice points over the bounding box, x-major to match the paint
/// order of the sweep.
fn build_lattice(bbox: &BoundingBox, interval: f32) -> Vec<Point> {
    let mut lattice = Vec::new();
    let mut x = bbox.min_x;
    while x < bbox.max_x {
        let mut y = bbox.min_y;
        while y < bbox.max_y {
            lattice.push(Point::new(x, y));
            y += interval;
        }
        x += interval;
    }
    lattice
}

/// Paint one lattice cell as a radial-gradient square patch.
///
/// The gradient runs from the configured opacity at the cell center to
/// zero alpha at `interval`, which is what blends adjacent cells into a
/// smooth field. Mesh mode saturates the inner stop so each cell reads
/// as a discrete disc.
fn paint_patch(pixmap: &mut Pixmap, cell: Point, value: f32, params: &FieldParams) {
    let interval = params.interval;
    let rgb = value_to_color(value, params.style.hue, params.style.max_value);
    let alpha = (params.style.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;

    let inner_radius = if params.mesh { interval * 1.5 } else { 1.0 };
    let inner_stop = (inner_radius / interval).min(1.0);

    let center = tiny_skia::Point::from_xy(cell.x, cell.y);
    let shader = RadialGradient::new(
        center,
        center,
        interval,
        vec![
            GradientStop::new(inner_stop, Color::from_rgba8(rgb.r, rgb.g, rgb.b, alpha)),
            GradientStop::new(1.0, Color::from_rgba8(rgb.r, rgb.g, rgb.b, 0)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    );

    let shader = match shader {
        Some(shader) => shader,
        None => return,
    };

    let mut paint = Paint::default();
    paint.shader = shader;
    paint.anti_alias = true;

    let side = 2.0 * interval;
    if let Some(rect) = Rect::from_xywh(cell.x - interval, cell.y - interval, side, side) {
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

/// Clip the painted field to the hull polygon with destination-in
/// compositing, removing the blocky overflow beyond the data extent.
fn mask_to_hull(pixmap: &mut Pixmap, polygon: &[Point]) {
    let mut pb = PathBuilder::new();
    pb.move_to(polygon[0].x, polygon[0].y);
    for vertex in &polygon[1..] {
        pb.line_to(vertex.x, vertex.y);
    }
    pb.close();

    let path = match pb.finish() {
        Some(path) => path,
        None => return,
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 255);
    paint.anti_alias = true;
    paint.blend_mode = BlendMode::DestinationIn;

    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}
