//! Configuration for the render pipeline.

use heatmap_common::{ClickStyle, DrawOptions, MapStyle};
use serde::{Deserialize, Serialize};

/// Configuration for a heat map pipeline instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Sampling cell size: positions within an `area` x `area` square
    /// cluster into a single sample.
    pub area: f32,
    /// Color and threshold configuration.
    pub style: MapStyle,
    /// Default draw options for render passes.
    pub draw: DrawOptions,
    /// Click star styling.
    pub click: ClickStyle,
    /// Latest-start deadline for scheduled render work, in milliseconds.
    pub deadline_ms: u64,
    /// Request a redraw every this many ingested samples (0 disables).
    pub redraw_every: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            area: 10.0,
            style: MapStyle::default(),
            draw: DrawOptions::default(),
            click: ClickStyle::default(),
            deadline_ms: 2000,
            redraw_every: 10,
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("surface dimensions must be non-zero".to_string());
        }
        if self.area <= 0.0 {
            return Err("area must be > 0".to_string());
        }
        self.style.validate()?;
        self.draw.validate()?;
        Ok(())
    }
}
