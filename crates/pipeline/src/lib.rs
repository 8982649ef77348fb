//! Render pipeline orchestration.
//!
//! Owns the configuration, the sampling grid and the drawing surface,
//! and sequences a render pass: snapshot, convex hull, interpolated
//! field, click overlay. Passes run on a deadline-bounded task queue and
//! are single-flight.

pub mod config;
pub mod pipeline;
pub mod scheduler;

pub use config::PipelineConfig;
pub use pipeline::{DrawRequest, HeatmapPipeline, PipelineError};
pub use scheduler::IdleScheduler;
