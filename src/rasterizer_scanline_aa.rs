//! High-level polygon scanline rasterizer with anti-aliasing.
//!
//! Accepts polygon contours (move_to / line_to / close), accumulates them
//! into coverage cells, and sweeps the result out row by row into a
//! [`Scanline`] container for the renderer.

use crate::basics::{is_close, is_move_to, is_stop, is_vertex, VertexSource};
use crate::rasterizer_cells_aa::RasterizerCellsAa;
use crate::rasterizer_sl_clip::RasterizerSlClip;

// ============================================================================
// Scanline trait: the interface that sweep_scanline feeds data into
// ============================================================================

/// Trait for scanline containers that accumulate coverage data.
pub trait Scanline {
    /// Prepare for a new scanline, clearing all span data.
    fn reset_spans(&mut self);

    /// Add a single cell at position `x` with coverage `cover` (0..=255).
    fn add_cell(&mut self, x: i32, cover: u32);

    /// Finalize the scanline at the given Y coordinate.
    fn finalize(&mut self, y: i32);

    /// Number of spans in this scanline (0 means empty).
    fn num_spans(&self) -> u32;

    /// The Y coordinate of this scanline.
    fn y(&self) -> i32;
}

// ============================================================================
// RasterizerScanlineAa: the high-level polygon rasterizer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
enum Status {
    Initial,
    MoveTo,
    LineTo,
    Closed,
}

/// Polygon rasterizer with anti-aliased output, bound to a fixed raster size.
///
/// Usage:
/// 1. Define contours with `move_to_d()` / `line_to_d()` or `add_path()`
/// 2. Call `rewind_scanlines()` then repeatedly `sweep_scanline()`
///
/// A completed sweep leaves the rasterizer empty and ready for the next shape.
pub struct RasterizerScanlineAa {
    outline: RasterizerCellsAa,
    clipper: RasterizerSlClip,
    start_x: f64,
    start_y: f64,
    status: Status,
    scan_y: i32,
}

impl RasterizerScanlineAa {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            outline: RasterizerCellsAa::new(width, height),
            clipper: RasterizerSlClip::new(0.0, width as f64),
            start_x: 0.0,
            start_y: 0.0,
            status: Status::Initial,
            scan_y: 0,
        }
    }

    /// Discard all polygon data.
    pub fn reset(&mut self) {
        self.outline.reset();
        self.status = Status::Initial;
    }

    // ========================================================================
    // Path building
    // ========================================================================

    /// Close the current polygon contour.
    pub fn close_polygon(&mut self) {
        if self.status == Status::LineTo {
            self.clipper
                .line_to(&mut self.outline, self.start_x, self.start_y);
            self.status = Status::Closed;
        }
    }

    /// Start a new contour; the previous one is closed automatically.
    pub fn move_to_d(&mut self, x: f64, y: f64) {
        self.close_polygon();
        self.start_x = x;
        self.start_y = y;
        self.clipper.move_to(x, y);
        self.status = Status::MoveTo;
    }

    pub fn line_to_d(&mut self, x: f64, y: f64) {
        if self.status == Status::Initial {
            self.move_to_d(x, y);
            return;
        }
        self.clipper.line_to(&mut self.outline, x, y);
        self.status = Status::LineTo;
    }

    /// Dispatch a vertex command.
    pub fn add_vertex(&mut self, x: f64, y: f64, cmd: u32) {
        if is_move_to(cmd) {
            self.move_to_d(x, y);
        } else if is_vertex(cmd) {
            self.line_to_d(x, y);
        } else if is_close(cmd) {
            self.close_polygon();
        }
    }

    /// Add all vertices from a vertex source.
    pub fn add_path(&mut self, vs: &mut dyn VertexSource, path_id: u32) {
        let (mut x, mut y) = (0.0, 0.0);
        vs.rewind(path_id);
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            self.add_vertex(x, y, cmd);
        }
    }

    pub fn min_x(&self) -> i32 {
        self.outline.min_x()
    }
    pub fn min_y(&self) -> i32 {
        self.outline.min_y()
    }
    pub fn max_x(&self) -> i32 {
        self.outline.max_x()
    }
    pub fn max_y(&self) -> i32 {
        self.outline.max_y()
    }

    // ========================================================================
    // Scanline sweeping
    // ========================================================================

    /// Close the open contour and prepare for sweeping.
    /// Returns `false` if nothing landed on the raster.
    pub fn rewind_scanlines(&mut self) -> bool {
        self.close_polygon();
        self.status = Status::Initial;
        if self.outline.is_empty() {
            return false;
        }
        self.scan_y = self.outline.min_y();
        true
    }

    /// Map an accumulated signed coverage to an 8-bit alpha under the
    /// non-zero winding rule.
    #[inline]
    pub fn calculate_alpha(area: f32) -> u32 {
        (area.abs().min(1.0) * 255.0 + 0.5) as u32
    }

    /// Extract the next non-empty row of coverage into `sl`.
    ///
    /// Swept rows are zeroed as they go. Returns `false` once every row has
    /// been consumed, at which point the rasterizer is empty again.
    pub fn sweep_scanline<SL: Scanline>(&mut self, sl: &mut SL) -> bool {
        loop {
            if self.outline.is_empty() || self.scan_y > self.outline.max_y() {
                self.outline.forget_bounds();
                return false;
            }
            let y = self.scan_y as u32;
            self.scan_y += 1;

            sl.reset_spans();
            let x1 = self.outline.min_x().max(0);
            let x2 = self.outline.max_x().min(self.outline.width() as i32 - 1);
            let mut cover = 0.0f32;
            let row = self.outline.row(y);
            for x in x1..=x2 {
                cover += row[x as usize];
                let alpha = Self::calculate_alpha(cover);
                if alpha != 0 {
                    sl.add_cell(x, alpha);
                }
            }
            self.outline.clear_row(y);

            if sl.num_spans() > 0 {
                sl.finalize(y as i32);
                return true;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
