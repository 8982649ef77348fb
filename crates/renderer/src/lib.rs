//! Surface painting for pointer-attention heat maps.
//!
//! Implements the rendering stages:
//! - Hue-gradient color mapping
//! - Interpolated field painting (radial gradient patches)
//! - Hull edge masking and sample markers
//! - Click star overlay
//! - PNG export

pub mod clicks;
pub mod color;
pub mod field;
pub mod markers;
pub mod png;

pub use clicks::render_clicks;
pub use color::{hsl_to_rgb, value_to_color};
pub use field::{render_field, FieldParams};
pub use png::{encode_png, PngError};
