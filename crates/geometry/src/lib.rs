//! Computational geometry for heat map boundaries.
//!
//! Implements the two geometric primitives the field renderer needs:
//! - Convex hull of a sample set (Andrew's monotone chain)
//! - Point-in-polygon containment (ray casting)

pub mod contains;
pub mod hull;

pub use contains::point_in_polygon;
pub use hull::convex_hull;
