//! Horizontal clipping for the scanline rasterizer.
//!
//! Segments are split where they cross the left or right edge of the clip
//! range. Pieces outside are flattened onto the edge as vertical segments,
//! which keeps the winding of every visible pixel intact while guaranteeing
//! the cell accumulator never sees an out-of-range column.

use crate::rasterizer_cells_aa::RasterizerCellsAa;

/// Stateful clipper: remembers the current point between `line_to` calls.
#[derive(Debug, Clone)]
pub struct RasterizerSlClip {
    clip_x1: f64,
    clip_x2: f64,
    x1: f64,
    y1: f64,
}

impl RasterizerSlClip {
    /// Clip to the column range `[x1, x2]`.
    pub fn new(x1: f64, x2: f64) -> Self {
        Self {
            clip_x1: x1.min(x2),
            clip_x2: x1.max(x2),
            x1: 0.0,
            y1: 0.0,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x1 = x;
        self.y1 = y;
    }

    /// Emit the clipped segment from the current point to (x2, y2).
    pub fn line_to(&mut self, cells: &mut RasterizerCellsAa, x2: f64, y2: f64) {
        let (x1, y1) = (self.x1, self.y1);
        self.x1 = x2;
        self.y1 = y2;

        let dx = x2 - x1;
        let mut ts = [0.0, 1.0, 1.0, 1.0];
        let mut n = 1;
        if dx != 0.0 {
            for edge in [self.clip_x1, self.clip_x2] {
                let t = (edge - x1) / dx;
                if t > 0.0 && t < 1.0 {
                    ts[n] = t;
                    n += 1;
                }
            }
        }
        ts[n] = 1.0;
        ts[1..n].sort_by(|a, b| a.total_cmp(b));

        let dy = y2 - y1;
        let clamp = |x: f64| x.clamp(self.clip_x1, self.clip_x2);
        let mut px = x1;
        let mut py = y1;
        for &t in &ts[1..=n] {
            let (nx, ny) = if t == 1.0 {
                (x2, y2)
            } else {
                (x1 + dx * t, y1 + dy * t)
            };
            cells.line(clamp(px), py, clamp(nx), ny);
            px = nx;
            py = ny;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
