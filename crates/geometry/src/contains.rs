//! Point-in-polygon containment via ray casting.

use heatmap_common::Point;

/// Test whether `query` lies inside the polygon.
///
/// Standard crossing-number test: walk each edge `(polygon[i],
/// polygon[prev])` and flip the parity when a horizontal ray from the
/// query to the left crosses it. The polygon is open; the closing edge is
/// iterated implicitly.
///
/// Edge convention: an edge is counted when the endpoints straddle the
/// query's y with a strict `>` comparison and the query is strictly left
/// of the crossing abscissa. A query exactly on a left edge is therefore
/// inside, on a right edge outside. Callers must not rely on boundary
/// classification beyond this consistency.
pub fn point_in_polygon(polygon: &[Point], query: Point) -> bool {
    let mut inside = false;
    if polygon.is_empty() {
        return inside;
    }

    let mut p = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[p];
        let crosses = ((a.y > query.y) != (b.y > query.y))
            && (query.x < (b.x - a.x) * (query.y - a.y) / (b.y - a.y) + a.x);
        if crosses {
            inside = !inside;
        }
        p = i;
    }

    inside
}
