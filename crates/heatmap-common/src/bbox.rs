//! Bounding box types and operations.

use crate::point::SamplePoint;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Compute the bounding box of a sample set.
    ///
    /// Extents are taken from independent orderings of the x and y axes,
    /// tie-broken by x ascending. Returns `None` for an empty set.
    pub fn of_samples(points: &[SamplePoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let (min_x, max_x) = axis_extent(points, |p| p.x);
        let (min_y, max_y) = axis_extent(points, |p| p.y);
        Some(Self::new(min_x, min_y, max_x, max_y))
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Check if a point is contained within this bbox.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Min/max along one axis via a full sort of the keys.
///
/// Only the extremes are consumed, but the ordering (primary axis, then x)
/// is the same total order the hull builder uses, keeping the two passes
/// deterministic with respect to each other.
fn axis_extent(points: &[SamplePoint], axis: impl Fn(&SamplePoint) -> f32) -> (f32, f32) {
    let mut keys: Vec<(f32, f32)> = points.iter().map(|p| (axis(p), p.x)).collect();
    keys.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    (keys[0].0, keys[keys.len() - 1].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_samples() {
        let points = vec![
            SamplePoint::new(3.0, 7.0, 1.0),
            SamplePoint::new(-2.0, 4.0, 1.0),
            SamplePoint::new(9.0, 0.5, 1.0),
        ];

        let bbox = BoundingBox::of_samples(&points).unwrap();
        assert_eq!(bbox.min_x, -2.0);
        assert_eq!(bbox.max_x, 9.0);
        assert_eq!(bbox.min_y, 0.5);
        assert_eq!(bbox.max_y, 7.0);
    }

    #[test]
    fn test_of_samples_empty() {
        assert!(BoundingBox::of_samples(&[]).is_none());
    }

    #[test]
    fn test_of_samples_single() {
        let points = vec![SamplePoint::new(5.0, 6.0, 1.0)];
        let bbox = BoundingBox::of_samples(&points).unwrap();
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert!(bbox.contains(5.0, 6.0));
    }

    #[test]
    fn test_contains() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.contains(5.0, 5.0));
        assert!(bbox.contains(0.0, 10.0));
        assert!(!bbox.contains(10.1, 5.0));
    }
}
