//! Style and draw-option configuration.

use serde::{Deserialize, Serialize};

/// Color and intensity mapping for a heat map surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapStyle {
    /// Hue parameter controlling the direction and span of the gradient.
    /// 0.5 spans orange to green, 0.8 orange to violet.
    pub hue: f32,
    /// Values at or above this map to the gradient's end color.
    pub max_value: f32,
    /// Fill opacity of painted patches, 0.0 to 1.0.
    pub opacity: f32,
    /// Samples must exceed this value to get a marker in the overlay.
    pub threshold: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            hue: 0.5,
            max_value: 100.0,
            opacity: 0.8,
            threshold: 110.0,
        }
    }
}

impl MapStyle {
    /// Load a style from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Validate the style parameters.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.hue) {
            return Err("hue must be in 0..=1".to_string());
        }
        if self.max_value <= 0.0 {
            return Err("max_value must be > 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err("opacity must be in 0..=1".to_string());
        }
        Ok(())
    }
}

/// Options for one field render pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// Neighborhood size for value estimation; higher blends smoother
    /// but costs more per lattice cell.
    pub limit: usize,
    /// Lattice step in surface units; lower produces a finer map.
    pub interval: f32,
    /// Paint discrete per-cell discs instead of a smooth blend.
    pub mesh: bool,
    /// Overlay labeled markers at raw sample locations.
    pub points: bool,
    /// Marker radius; also sizes the numeric label.
    pub point_size: f32,
    /// Mask the painted field to the hull outline.
    pub clean_edges: bool,
    /// Anchor pseudo-samples at the surface corners so the field spans
    /// the whole surface.
    pub corners: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            limit: 100,
            interval: 8.0,
            mesh: false,
            points: false,
            point_size: 13.0,
            clean_edges: true,
            corners: true,
        }
    }
}

impl DrawOptions {
    /// Load draw options from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Validate the options.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit == 0 {
            return Err("limit must be >= 1".to_string());
        }
        if self.interval <= 0.0 {
            return Err("interval must be > 0".to_string());
        }
        if self.point_size <= 0.0 {
            return Err("point_size must be > 0".to_string());
        }
        Ok(())
    }
}

/// Styling for the click overlay stars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickStyle {
    /// Star fill color [R, G, B, A].
    pub color: [u8; 4],
    /// Outer radius of the star; inner radius is half of this.
    pub size: f32,
}

impl Default for ClickStyle {
    fn default() -> Self {
        Self {
            color: [231, 76, 60, 191],
            size: 20.0,
        }
    }
}
