//! Common types shared across the heat map crates.

pub mod bbox;
pub mod color;
pub mod point;
pub mod style;

pub use bbox::BoundingBox;
pub use color::Rgb;
pub use point::{Point, SamplePoint};
pub use style::{ClickStyle, DrawOptions, MapStyle};
