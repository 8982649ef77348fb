//! The heat map pipeline: ingestion, sequencing, surface ownership.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use geometry::convex_hull;
use heatmap_common::{ClickStyle, DrawOptions, MapStyle, SamplePoint};
use renderer::clicks::render_clicks;
use renderer::field::{render_field, FieldParams};
use renderer::png::{encode_png, PngError};
use sampler::{RedrawCadence, SampleGrid};
use thiserror::Error;
use tiny_skia::Pixmap;

use crate::config::PipelineConfig;
use crate::scheduler::IdleScheduler;

/// Errors from pipeline setup and rendering.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot create drawing surface ({width}x{height})")]
    Surface { width: u32, height: u32 },

    #[error("render task was dropped before completion")]
    Canceled,

    #[error(transparent)]
    Encode(#[from] PngError),
}

/// Per-call overrides for one render pass.
///
/// Unset fields fall back to the pipeline's configuration; unset data
/// falls back to the sampling grid's current snapshot.
#[derive(Debug, Clone, Default)]
pub struct DrawRequest {
    pub data_points: Option<Vec<SamplePoint>>,
    pub click_points: Option<Vec<SamplePoint>>,
    pub options: Option<DrawOptions>,
    pub style: Option<MapStyle>,
    pub click_style: Option<ClickStyle>,
}

/// Owns a heat map surface and its sample accumulator.
///
/// A render pass snapshots the grid, builds the convex hull, then runs
/// the field pass and the click overlay strictly in sequence on the
/// deadline-bounded scheduler. Passes are single-flight: a `draw`
/// arriving while another pass is in flight waits for it instead of
/// racing it.
///
/// Construction fails (and logs the failure once) when the surface
/// cannot be created, which short-circuits all rendering for that
/// would-be instance.
pub struct HeatmapPipeline {
    config: PipelineConfig,
    grid: Mutex<SampleGrid>,
    cadence: Mutex<RedrawCadence>,
    surface: Arc<Mutex<Pixmap>>,
    scheduler: IdleScheduler,
    flight: tokio::sync::Mutex<()>,
}

impl HeatmapPipeline {
    /// Create a pipeline with its drawing surface.
    ///
    /// Must be called within a tokio runtime; the scheduler worker is
    /// spawned on it.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;

        let surface = Pixmap::new(config.width, config.height).ok_or_else(|| {
            tracing::error!(
                width = config.width,
                height = config.height,
                "drawing surface could not be created; rendering disabled"
            );
            PipelineError::Surface {
                width: config.width,
                height: config.height,
            }
        })?;

        let mut grid = SampleGrid::new(config.width as f32, config.height as f32, config.area);
        if config.draw.corners {
            grid.anchor_corners();
        }

        let scheduler = IdleScheduler::new(Duration::from_millis(config.deadline_ms));

        Ok(Self {
            grid: Mutex::new(grid),
            cadence: Mutex::new(RedrawCadence::new(config.redraw_every)),
            surface: Arc::new(Mutex::new(surface)),
            scheduler,
            flight: tokio::sync::Mutex::new(()),
            config,
        })
    }

    /// Record a pointer position; returns true when the configured
    /// redraw cadence is due.
    pub fn ingest_move(&self, x: f32, y: f32, at: Instant) -> bool {
        lock_or_recover(&self.grid).record_move(x, y, at);
        lock_or_recover(&self.cadence).record()
    }

    /// Record a click. Also re-arms the dwell clock, so the pause around
    /// the interaction is not credited as dwell.
    pub fn ingest_click(&self, x: f32, y: f32) {
        let mut grid = lock_or_recover(&self.grid);
        grid.record_click(x, y);
        grid.reset_dwell_clock();
    }

    /// Run a render pass with the pipeline's configuration and the
    /// grid's current snapshots.
    pub async fn draw(&self) -> Result<(), PipelineError> {
        self.draw_with(DrawRequest::default()).await
    }

    /// Run a render pass with per-call overrides.
    pub async fn draw_with(&self, request: DrawRequest) -> Result<(), PipelineError> {
        let _flight = self.flight.lock().await;

        let explicit_data = matches!(&request.data_points, Some(d) if !d.is_empty());
        let data_points = match request.data_points.filter(|d| !d.is_empty()) {
            Some(points) => points,
            None => lock_or_recover(&self.grid).snapshot(),
        };

        let options = request.options.unwrap_or_else(|| self.config.draw.clone());
        let style = request.style.unwrap_or_else(|| self.config.style.clone());
        let click_style = request
            .click_style
            .unwrap_or_else(|| self.config.click.clone());

        // A live snapshot keeps growing between passes; masking its edge
        // flickers the boundary, so only explicit data gets the mask.
        let clean_edges = explicit_data && options.clean_edges;

        if data_points.is_empty() {
            tracing::debug!("field pass skipped: no samples recorded");
        } else {
            let polygon = convex_hull(&data_points);
            tracing::debug!(
                samples = data_points.len(),
                vertices = polygon.len(),
                "starting field pass"
            );

            let surface = Arc::clone(&self.surface);
            let completed = self
                .scheduler
                .schedule(move || {
                    let mut pixmap = lock_or_recover(&surface);
                    render_field(
                        &mut pixmap,
                        &FieldParams {
                            limit: options.limit,
                            interval: options.interval,
                            data_points: &data_points,
                            polygon: &polygon,
                            clean_edges,
                            mesh: options.mesh,
                            points: options.points,
                            point_size: options.point_size,
                            corners: options.corners,
                            style: &style,
                        },
                    );
                })
                .await;
            if !completed {
                return Err(PipelineError::Canceled);
            }
        }

        // Explicit click data is used as-is (empty suppresses the
        // overlay); only an unset field falls back to tracked clicks.
        let click_points = match request.click_points {
            Some(points) => points,
            None => lock_or_recover(&self.grid).click_snapshot(),
        };
        if !click_points.is_empty() {
            let surface = Arc::clone(&self.surface);
            let completed = self
                .scheduler
                .schedule(move || {
                    let mut pixmap = lock_or_recover(&surface);
                    render_clicks(&mut pixmap, &click_points, &click_style);
                })
                .await;
            if !completed {
                return Err(PipelineError::Canceled);
            }
        }

        tracing::debug!("render pass complete");
        Ok(())
    }

    /// Encode the current surface contents as a PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, PipelineError> {
        let pixmap = lock_or_recover(&self.surface);
        let png = encode_png(
            pixmap.data(),
            pixmap.width() as usize,
            pixmap.height() as usize,
        )?;
        Ok(png)
    }

    /// Inspect the surface without copying it.
    pub fn with_surface<R>(&self, f: impl FnOnce(&Pixmap) -> R) -> R {
        f(&lock_or_recover(&self.surface))
    }

    /// The pipeline's configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }
}

/// Lock a mutex, recovering the guard if a previous holder panicked.
fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
