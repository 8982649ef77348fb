//! Point types for surface coordinates and accumulated samples.

use serde::{Deserialize, Serialize};

/// A point in 2D space (surface pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A sample with an accumulated intensity.
///
/// `value` is non-negative in normal operation: dwell time (milliseconds
/// divided by ten) for pointer samples, a raw count for click samples.
/// Duplicate coordinates are permitted and never deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f32,
    pub y: f32,
    pub value: f32,
}

impl SamplePoint {
    pub fn new(x: f32, y: f32, value: f32) -> Self {
        Self { x, y, value }
    }

    /// The sample's location without its value.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<SamplePoint> for Point {
    fn from(sample: SamplePoint) -> Self {
        sample.position()
    }
}
