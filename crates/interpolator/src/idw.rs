//! Inverse-distance-weighted point value estimation.

use geometry::point_in_polygon;
use heatmap_common::{Point, SamplePoint};

/// Sentinel returned for queries outside the hull polygon.
///
/// Domain-reserved "no value" marker; callers must special-case it and
/// never treat it as a real intensity.
pub const NO_VALUE: f32 = -255.0;

/// Clamp a neighborhood limit against the sample count.
///
/// The estimator requires `1 <= limit <= points_len`; this applies the
/// caller-side clamp the field renderer uses: cap at the sample count,
/// widening by one when there is room.
pub fn clamp_neighborhood(limit: usize, points_len: usize) -> usize {
    if limit >= points_len {
        points_len
    } else {
        limit + 1
    }
}

/// Estimate the value at `query` from the `limit` nearest samples.
///
/// Returns [`NO_VALUE`] when the query lies outside `polygon`. Inside,
/// the estimate is the inverse-distance-weighted average of the `limit`
/// nearest samples, with each weight the reciprocal of the squared
/// distance squared; a query coinciding exactly with a sample
/// short-circuits to that sample's value.
///
/// Callers must clamp `limit` to `1..=points.len()` (see
/// [`clamp_neighborhood`]) and guarantee `points` is non-empty; in normal
/// operation both hold because hull containment already implies at least
/// three samples exist.
pub fn estimate_value(
    limit: usize,
    polygon: &[Point],
    points: &[SamplePoint],
    query: Point,
) -> f32 {
    if !point_in_polygon(polygon, query) {
        return NO_VALUE;
    }

    debug_assert!(limit >= 1, "neighborhood limit must be >= 1");
    debug_assert!(
        limit <= points.len(),
        "neighborhood limit exceeds sample count"
    );

    // Squared distances to every sample; an exact hit wins outright.
    let mut distances: Vec<(f64, usize)> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let dx = (query.x - p.x) as f64;
        let dy = (query.y - p.y) as f64;
        let dist = dx * dx + dy * dy;
        if dist == 0.0 {
            return p.value;
        }
        distances.push((dist, i));
    }

    distances.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut weighted = 0.0f64;
    let mut total = 0.0f64;
    for &(dist, i) in distances.iter().take(limit) {
        let inv = 1.0 / (dist * dist);
        weighted += inv * points[i].value as f64;
        total += inv;
    }

    (weighted / total) as f32
}
