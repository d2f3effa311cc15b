//! Base renderer with clipping.
//!
//! Wraps a pixel format with an inclusive clip rectangle so that every
//! operation reaching the pixel format is bounded within the visible area.

use crate::basics::CoverType;
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase: clip-and-delegate renderer
// ============================================================================

/// Base renderer that clips all operations to a rectangle before delegating
/// to the underlying pixel format.
pub struct RendererBase<PF: PixelFormat> {
    ren: PF,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl<PF: PixelFormat> RendererBase<PF> {
    /// Wrap `ren`, clipping to its full extent.
    pub fn new(ren: PF) -> Self {
        let x2 = ren.width() as i32 - 1;
        let y2 = ren.height() as i32 - 1;
        Self {
            ren,
            x1: 0,
            y1: 0,
            x2,
            y2,
        }
    }

    #[inline]
    pub fn inbox(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && y >= self.y1 && x <= self.x2 && y <= self.y2
    }

    // ========================================================================
    // Rendering operations (clip then delegate)
    // ========================================================================

    /// Fill the clip box with a solid color.
    pub fn clear(&mut self, c: &PF::ColorType) {
        if self.x1 > self.x2 {
            return;
        }
        let len = (self.x2 - self.x1 + 1) as u32;
        for y in self.y1..=self.y2 {
            self.ren.copy_hline(self.x1, y, len, c);
        }
    }

    /// Blend a span with per-pixel coverage, clipped to the box.
    pub fn blend_solid_hspan(&mut self, x: i32, y: i32, c: &PF::ColorType, covers: &[CoverType]) {
        if y < self.y1 || y > self.y2 {
            return;
        }
        let mut x = x;
        let mut covers = covers;
        if x < self.x1 {
            let skip = (self.x1 - x) as usize;
            if skip >= covers.len() {
                return;
            }
            covers = &covers[skip..];
            x = self.x1;
        }
        let room = (self.x2 - x + 1).max(0) as usize;
        if covers.len() > room {
            covers = &covers[..room];
        }
        if !covers.is_empty() {
            self.ren.blend_solid_hspan(x, y, c, covers);
        }
    }

    /// Read a pixel, `None` outside the clip box.
    pub fn pixel(&self, x: i32, y: i32) -> Option<PF::ColorType> {
        if self.inbox(x, y) {
            Some(self.ren.pixel(x, y))
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
