//! Inverse-distance-weighted value estimation over a sample cloud.

pub mod idw;

pub use idw::{clamp_neighborhood, estimate_value, NO_VALUE};
