//! Dwell-time and click accumulation grid.

use std::time::Instant;

use heatmap_common::SamplePoint;

/// Area-bucketed accumulator for pointer dwell time and clicks.
///
/// The surface is divided into square cells of `area` surface units.
/// Dwell accumulation credits the time between two consecutive pointer
/// positions to the cell of the *earlier* position: the pointer "dwelt"
/// there until it moved on. Clicks are simple per-cell counters.
///
/// Callers pass their own [`Instant`]s, which keeps accumulation
/// deterministic under test.
pub struct SampleGrid {
    area: f32,
    cols: usize,
    rows: usize,
    dwell_ms: Vec<f64>,
    clicks: Vec<u32>,
    /// Cell and timestamp of the most recent pointer position.
    last: Option<(usize, usize, Instant)>,
}

impl SampleGrid {
    /// Create a grid covering a `width` x `height` surface with square
    /// cells of `area` units. One extra cell per axis absorbs positions
    /// rounding past the surface edge.
    pub fn new(width: f32, height: f32, area: f32) -> Self {
        let cols = (((width + area) / area).round() as usize) + 1;
        let rows = (((height + area) / area).round() as usize) + 1;

        Self {
            area,
            cols,
            rows,
            dwell_ms: vec![0.0; cols * rows],
            clicks: vec![0; cols * rows],
            last: None,
        }
    }

    /// Cell grid dimensions (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Record a pointer position at time `at`.
    ///
    /// The elapsed time since the previous position is credited to the
    /// previous position's cell. The first position after construction
    /// or a [`reset_dwell_clock`](Self::reset_dwell_clock) only arms the
    /// tracker.
    pub fn record_move(&mut self, x: f32, y: f32, at: Instant) {
        let (col, row) = match self.cell_of(x, y) {
            Some(cell) => cell,
            None => return,
        };

        if let Some((prev_col, prev_row, prev_at)) = self.last {
            let elapsed_ms = at.duration_since(prev_at).as_secs_f64() * 1000.0;
            self.dwell_ms[prev_row * self.cols + prev_col] += elapsed_ms;
        }
        self.last = Some((col, row, at));
    }

    /// Record a click at a position.
    pub fn record_click(&mut self, x: f32, y: f32) {
        if let Some((col, row)) = self.cell_of(x, y) {
            self.clicks[row * self.cols + col] += 1;
        }
    }

    /// Drop the pending dwell interval.
    ///
    /// Called on interaction boundaries (e.g. pointer-down) so a long
    /// pause does not get credited as dwell on the last visited cell.
    pub fn reset_dwell_clock(&mut self) {
        self.last = None;
    }

    /// Seed the four corner cells with a unit value so the interpolated
    /// field spans the entire surface.
    pub fn anchor_corners(&mut self) {
        let max_col = self.cols - 1;
        let max_row = self.rows - 1;
        for (col, row) in [(0, 0), (0, max_row), (max_col, 0), (max_col, max_row)] {
            let cell = &mut self.dwell_ms[row * self.cols + col];
            if *cell == 0.0 {
                // Corner anchors carry one snapshot unit (10 ms of dwell)
                *cell = 10.0;
            }
        }
    }

    /// Snapshot the non-empty dwell cells as sample points.
    ///
    /// Coordinates are cell origins in surface units; values are dwell
    /// milliseconds scaled down by ten to a displayable intensity.
    pub fn snapshot(&self) -> Vec<SamplePoint> {
        self.collect(|idx| {
            let dwell = self.dwell_ms[idx];
            (dwell > 0.0).then(|| (dwell / 10.0) as f32)
        })
    }

    /// Snapshot the non-empty click cells; values are raw counts.
    pub fn click_snapshot(&self) -> Vec<SamplePoint> {
        self.collect(|idx| {
            let count = self.clicks[idx];
            (count > 0).then(|| count as f32)
        })
    }

    fn collect(&self, value_of: impl Fn(usize) -> Option<f32>) -> Vec<SamplePoint> {
        let mut data = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if let Some(value) = value_of(row * self.cols + col) {
                    data.push(SamplePoint::new(
                        col as f32 * self.area,
                        row as f32 * self.area,
                        value,
                    ));
                }
            }
        }
        data
    }

    fn cell_of(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(x, y, "ignoring non-finite pointer position");
            return None;
        }
        let col = (x / self.area).round().max(0.0) as usize;
        let row = (y / self.area).round().max(0.0) as usize;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((col, row))
    }
}
