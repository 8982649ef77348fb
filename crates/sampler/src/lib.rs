//! Pointer sample accumulation.
//!
//! Buckets raw pointer positions into a coarse cell grid, crediting
//! dwell time to the previously occupied cell and counting clicks, and
//! produces the sample-point snapshots the rendering pipeline consumes.

pub mod cadence;
pub mod grid;

pub use cadence::RedrawCadence;
pub use grid::SampleGrid;
