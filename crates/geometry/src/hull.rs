//! Convex hull construction using Andrew's monotone chain.

use heatmap_common::{Point, SamplePoint};

/// Cross product of the vectors ab and ac.
///
/// Positive when a→b→c is a strict left turn, zero when collinear.
fn cross(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Compute the convex hull polygon enclosing a set of samples.
///
/// Scans a working copy sorted by x (ties broken by y) to build the lower
/// chain, then the reverse order for the upper chain, popping any middle
/// point that does not make a strict left turn. The two chains are joined
/// with each chain's final point dropped, so the polygon is open: closure
/// is implicit when iterating edges.
///
/// Inputs with fewer than three points produce a degenerate polygon of
/// 0-2 vertices; callers must treat such a polygon as "no usable
/// boundary" before masking or containment tests.
pub fn convex_hull(points: &[SamplePoint]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.iter().map(|p| p.position()).collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let mut lower: Vec<Point> = Vec::new();
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::new();
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
